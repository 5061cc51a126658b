//! Assembles the five LCS components and reshapes the aggregated result into
//! a library-wide breakdown plus the version-specific recency part.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::{
    ComponentResult, LanguageAffinityScore, LibraryComponent, LibraryConfidenceOutput,
    LibraryContext, LibraryMetadata, LibraryScoreBreakdown, PopularityScore, RecencyRiskScore,
    SimplicityScore, StabilityScore, VersionMetadata, VersionScore, LANGUAGE_ID, POPULARITY_ID,
    RECENCY_ID, SIMPLICITY_ID, STABILITY_ID,
};
use crate::aggregator::{AggregatorResult, ComponentInfo, WeightedScoreAggregator};
use crate::config::LibraryWeights;
use crate::error::Result;
use crate::model::ModelMetadata;
use crate::normalize::{clamp01, round2};

/// LCS for one version, with attribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionCalculationResult {
    pub version: String,
    pub release_date: DateTime<Utc>,
    /// Sum of all five contributions, rounded to two decimals.
    pub score: f64,
    pub library_breakdown: LibraryScoreBreakdown,
    pub recency_breakdown: ComponentResult,
}

impl VersionCalculationResult {
    pub fn to_version_score(&self) -> VersionScore {
        VersionScore {
            version: self.version.clone(),
            release_date: self.release_date,
            recency: self.recency_breakdown,
            score: self.score,
        }
    }
}

/// Library Confidence Score calculator. Build once and share.
#[derive(Debug)]
pub struct LibraryCalculator {
    aggregator: WeightedScoreAggregator<LibraryComponent>,
    weights: LibraryWeights,
}

impl LibraryCalculator {
    /// Calculator with the built-in weights.
    pub fn new() -> Result<Self> {
        Self::with_weights(LibraryWeights::default())
    }

    pub fn with_weights(weights: LibraryWeights) -> Result<Self> {
        let components: Vec<Box<LibraryComponent>> = vec![
            Box::new(RecencyRiskScore::new(weights.recency)),
            Box::new(StabilityScore::new(weights.stability)),
            Box::new(PopularityScore::new(weights.popularity)),
            Box::new(SimplicityScore::new(weights.simplicity)),
            Box::new(LanguageAffinityScore::new(weights.language)),
        ];
        let aggregator = WeightedScoreAggregator::new("library_confidence", components)?;
        Ok(Self {
            aggregator,
            weights,
        })
    }

    pub fn weights(&self) -> LibraryWeights {
        self.weights
    }

    pub fn component_info(&self) -> Vec<ComponentInfo> {
        self.aggregator.component_info()
    }

    /// Raw aggregator output for one triple.
    pub fn aggregate(
        &self,
        library: &LibraryMetadata,
        version: &VersionMetadata,
        model: &ModelMetadata,
    ) -> AggregatorResult {
        let ctx = LibraryContext {
            library,
            version,
            model,
        };
        self.aggregator.calculate(&ctx)
    }

    pub fn score_version(
        &self,
        library: &LibraryMetadata,
        version: &VersionMetadata,
        model: &ModelMetadata,
    ) -> VersionCalculationResult {
        let result = self.aggregate(library, version, model);

        let library_breakdown = LibraryScoreBreakdown {
            stability: self.component(&result, STABILITY_ID, self.weights.stability),
            simplicity: self.component(&result, SIMPLICITY_ID, self.weights.simplicity),
            popularity: self.component(&result, POPULARITY_ID, self.weights.popularity),
            language: self.component(&result, LANGUAGE_ID, self.weights.language),
        };
        let recency_breakdown = self.component(&result, RECENCY_ID, self.weights.recency);

        let score = round2(clamp01(
            library_breakdown.total_contribution() + recency_breakdown.contribution,
        ));

        debug!(
            library = %library.name,
            version = %version.version,
            model = %model.id,
            recency = recency_breakdown.value,
            stability = library_breakdown.stability.value,
            popularity = library_breakdown.popularity.value,
            simplicity = library_breakdown.simplicity.value,
            language = library_breakdown.language.value,
            score,
            "scored library version"
        );

        VersionCalculationResult {
            version: version.version.clone(),
            release_date: version.release_date,
            score,
            library_breakdown,
            recency_breakdown,
        }
    }

    /// Score every version, preserving the caller's order.
    pub fn score_versions(
        &self,
        library: &LibraryMetadata,
        versions: &[VersionMetadata],
        model: &ModelMetadata,
    ) -> Vec<VersionCalculationResult> {
        versions
            .iter()
            .map(|v| self.score_version(library, v, model))
            .collect()
    }

    /// Full LCS output: the library-wide breakdown plus per-version scores.
    /// With no versions the library breakdown is zeroed at the configured weights.
    pub fn score_library(
        &self,
        library: &LibraryMetadata,
        versions: &[VersionMetadata],
        model: &ModelMetadata,
    ) -> LibraryConfidenceOutput {
        let results = self.score_versions(library, versions, model);
        let library_score = results
            .first()
            .map(|r| r.library_breakdown)
            .unwrap_or_else(|| self.empty_breakdown());
        LibraryConfidenceOutput {
            library_score,
            versions: results.iter().map(|r| r.to_version_score()).collect(),
        }
    }

    pub fn empty_breakdown(&self) -> LibraryScoreBreakdown {
        LibraryScoreBreakdown {
            stability: ComponentResult::empty(self.weights.stability),
            simplicity: ComponentResult::empty(self.weights.simplicity),
            popularity: ComponentResult::empty(self.weights.popularity),
            language: ComponentResult::empty(self.weights.language),
        }
    }

    fn component(&self, result: &AggregatorResult, id: &str, weight: f64) -> ComponentResult {
        result
            .get(id)
            .map(ComponentResult::from)
            .unwrap_or_else(|| ComponentResult::empty(weight))
    }
}
