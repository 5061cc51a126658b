//! Library Confidence Score (LCS).
//!
//! Five signals estimate how well a model's training data covers a library
//! version: release timing vs. the model cutoff (version-specific), plus
//! stability, simplicity, popularity and language affinity (library-wide).

pub mod calculator;
pub mod language;
pub mod popularity;
pub mod recency;
pub mod simplicity;
pub mod stability;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregator::{ComponentBreakdown, ScoreComponent};
use crate::model::ModelMetadata;

pub use calculator::{LibraryCalculator, VersionCalculationResult};
pub use language::LanguageAffinityScore;
pub use popularity::PopularityScore;
pub use recency::RecencyRiskScore;
pub use simplicity::SimplicityScore;
pub use stability::StabilityScore;

pub const RECENCY_ID: &str = "recency";
pub const STABILITY_ID: &str = "stability";
pub const SIMPLICITY_ID: &str = "simplicity";
pub const POPULARITY_ID: &str = "popularity";
pub const LANGUAGE_ID: &str = "language";

/// Library-wide facts supplied by a package-registry adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryMetadata {
    pub name: String,
    pub language: String,
    pub age_in_years: f64,
    pub release_count: u64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub dependents_count: u64,
}

/// A single published version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionMetadata {
    /// Free-form version string; not necessarily semver.
    pub version: String,
    pub release_date: DateTime<Utc>,
}

impl VersionMetadata {
    pub fn new(version: impl Into<String>, release_date: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            release_date,
        }
    }
}

/// Everything an LCS component may read for one (library, version, model) triple.
#[derive(Debug, Clone, Copy)]
pub struct LibraryContext<'a> {
    pub library: &'a LibraryMetadata,
    pub version: &'a VersionMetadata,
    pub model: &'a ModelMetadata,
}

/// Component object type stored by the LCS aggregator.
pub type LibraryComponent = dyn for<'a> ScoreComponent<LibraryContext<'a>>;

/// Value, weight and weighted contribution of one component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentResult {
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl ComponentResult {
    /// Zero value that still reports the component's configured weight.
    pub fn empty(weight: f64) -> Self {
        Self {
            value: 0.0,
            weight,
            contribution: 0.0,
        }
    }
}

impl From<&ComponentBreakdown> for ComponentResult {
    fn from(b: &ComponentBreakdown) -> Self {
        Self {
            value: b.raw_value,
            weight: b.weight,
            contribution: b.contribution,
        }
    }
}

/// Library-wide part of the LCS (identical for every version).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryScoreBreakdown {
    pub stability: ComponentResult,
    pub simplicity: ComponentResult,
    pub popularity: ComponentResult,
    pub language: ComponentResult,
}

impl LibraryScoreBreakdown {
    pub fn total_contribution(&self) -> f64 {
        self.stability.contribution
            + self.simplicity.contribution
            + self.popularity.contribution
            + self.language.contribution
    }
}

/// Per-version LCS as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionScore {
    pub version: String,
    pub release_date: DateTime<Utc>,
    pub recency: ComponentResult,
    pub score: f64,
}

/// LCS output for one library against one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfidenceOutput {
    pub library_score: LibraryScoreBreakdown,
    pub versions: Vec<VersionScore>,
}
