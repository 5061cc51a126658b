//! Model capability score (LGS).
//!
//! Four signals describe a model's general breadth independent of any library:
//! declared capabilities, context/output limits, how recent its knowledge is,
//! and how open it is.

pub mod calculator;
pub mod capability;
pub mod limit;
pub mod openness;
pub mod recency;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregator::ScoreComponent;
use crate::library::ComponentResult;

pub use calculator::{ModelCalculator, ModelScore};
pub use capability::CapabilityScore;
pub use limit::LimitScore;
pub use openness::OpennessScore;
pub use recency::ModelRecencyScore;

pub const CAPABILITY_ID: &str = "capability";
pub const LIMIT_ID: &str = "limit";
pub const RECENCY_ID: &str = "recency";
pub const OPENNESS_ID: &str = "openness";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modalities {
    #[serde(default)]
    pub input: Vec<String>,
    #[serde(default)]
    pub output: Vec<String>,
}

impl Modalities {
    pub fn text_only() -> Self {
        Self {
            input: vec!["text".to_string()],
            output: vec!["text".to_string()],
        }
    }

    pub fn multimodal_input(&self) -> bool {
        self.input.len() > 1
    }

    pub fn multimodal_output(&self) -> bool {
        self.output.len() > 1
    }
}

impl Default for Modalities {
    fn default() -> Self {
        Self::text_only()
    }
}

/// Model facts supplied by a model-registry adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub id: String,
    pub name: String,
    /// Training-data knowledge cutoff used for library version comparisons.
    pub cutoff_date: DateTime<Utc>,
    #[serde(default)]
    pub reasoning: bool,
    #[serde(default)]
    pub tool_call: bool,
    #[serde(default)]
    pub structured_output: bool,
    #[serde(default)]
    pub attachment: bool,
    #[serde(default)]
    pub modalities: Modalities,
    #[serde(default)]
    pub context_limit: u64,
    #[serde(default)]
    pub output_limit: u64,
    #[serde(default)]
    pub knowledge_cutoff: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub open_weights: bool,
    /// Free-form compatibility marker, e.g. an SDK package name.
    #[serde(default)]
    pub api_compatibility: String,
}

impl ModelMetadata {
    /// Minimal model: only a cutoff, no capabilities.
    pub fn with_cutoff(id: impl Into<String>, cutoff_date: DateTime<Utc>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            cutoff_date,
            knowledge_cutoff: Some(cutoff_date),
            ..Default::default()
        }
    }
}

/// Everything an LGS component may read.
#[derive(Debug, Clone, Copy)]
pub struct ModelContext<'a> {
    pub model: &'a ModelMetadata,
    /// Upper end of the recency reference range.
    pub now: DateTime<Utc>,
}

pub type ModelComponent = dyn for<'a> ScoreComponent<ModelContext<'a>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelScoreBreakdown {
    pub capability: ComponentResult,
    pub limit: ComponentResult,
    pub recency: ComponentResult,
    pub openness: ComponentResult,
}
