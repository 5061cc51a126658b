//! Output shape of a full scoring run: inputs summarized for display, then the
//! three score layers (LCS, LGS, final).

use serde::Serialize;

use crate::final_score::FinalScoreOutput;
use crate::library::{LibraryConfidenceOutput, LibraryMetadata, VersionMetadata};
use crate::model::{ModelMetadata, ModelScoreBreakdown};

/// What to score: one library (with its versions) against one model.
#[derive(Debug, Clone)]
pub struct ScoreRequest {
    /// Package ecosystem, e.g. "NPM".
    pub platform: String,
    pub library: LibraryMetadata,
    pub versions: Vec<VersionMetadata>,
    pub model: ModelMetadata,
}

impl ScoreRequest {
    pub fn new(
        library: LibraryMetadata,
        versions: Vec<VersionMetadata>,
        model: ModelMetadata,
    ) -> Self {
        Self {
            platform: "NPM".to_string(),
            library,
            versions,
            model,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryMetadataSummary {
    pub language: String,
    pub stars: u64,
    pub dependents_count: u64,
    pub release_count: u64,
    /// One decimal.
    pub age_in_years: f64,
    pub keywords: Vec<String>,
}

impl From<&LibraryMetadata> for LibraryMetadataSummary {
    fn from(lib: &LibraryMetadata) -> Self {
        Self {
            language: lib.language.clone(),
            stars: lib.stars,
            dependents_count: lib.dependents_count,
            release_count: lib.release_count,
            age_in_years: (lib.age_in_years * 10.0).round() / 10.0,
            keywords: lib.keywords.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityFlags {
    pub reasoning: bool,
    pub tool_call: bool,
    pub structured_output: bool,
    pub attachment: bool,
    pub multimodal_input: bool,
    pub multimodal_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelMetadataSummary {
    pub name: String,
    /// "YYYY-MM", empty when unknown.
    pub knowledge_cutoff: String,
    pub context_limit: u64,
    pub output_limit: u64,
    pub capabilities: CapabilityFlags,
}

impl From<&ModelMetadata> for ModelMetadataSummary {
    fn from(m: &ModelMetadata) -> Self {
        Self {
            name: m.name.clone(),
            knowledge_cutoff: m
                .knowledge_cutoff
                .map(|d| d.format("%Y-%m").to_string())
                .unwrap_or_default(),
            context_limit: m.context_limit,
            output_limit: m.output_limit,
            capabilities: CapabilityFlags {
                reasoning: m.reasoning,
                tool_call: m.tool_call,
                structured_output: m.structured_output,
                attachment: m.attachment,
                multimodal_input: m.modalities.multimodal_input(),
                multimodal_output: m.modalities.multimodal_output(),
            },
        }
    }
}

/// LGS as reported. No breakdown when nothing was scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelScoreReport {
    pub score: f64,
    pub breakdown: Option<ModelScoreBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub library: String,
    pub platform: String,
    /// Display name of the model.
    pub llm: String,
    pub library_metadata: LibraryMetadataSummary,
    pub llm_metadata: ModelMetadataSummary,
    #[serde(rename = "LCS")]
    pub lcs: LibraryConfidenceOutput,
    #[serde(rename = "LGS")]
    pub lgs: ModelScoreReport,
    #[serde(rename = "FS")]
    pub fs: FinalScoreOutput,
}
