//! # Scoring engine
//! Owns both calculators, built once with eager weight validation, and turns a
//! [`ScoreRequest`] into a [`ScoreReport`]. Pure apart from tracing and metrics.

use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

use crate::breaking::detect_breaking_changes;
use crate::buckets::{group_versions_into_buckets, ScoredVersion, VersionBucket};
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::final_score::{calculate_final_scores, FinalScoreOutput};
use crate::library::{LibraryCalculator, LibraryConfidenceOutput};
use crate::model::{ModelCalculator, ModelScore};
use crate::report::{
    LibraryMetadataSummary, ModelMetadataSummary, ModelScoreReport, ScoreReport, ScoreRequest,
};
use crate::telemetry::ensure_metrics_described;

#[derive(Debug)]
pub struct ScoringEngine {
    library: LibraryCalculator,
    model: ModelCalculator,
}

impl ScoringEngine {
    /// Fails when either weight set does not sum to 1.0.
    pub fn new(cfg: &ScoringConfig) -> Result<Self> {
        Ok(Self {
            library: LibraryCalculator::with_weights(cfg.library)?,
            model: ModelCalculator::from_config(cfg)?,
        })
    }

    /// Engine from `ScoringConfig::load_default()`.
    pub fn from_default_config() -> Result<Self> {
        let cfg = ScoringConfig::load_default()?;
        Self::new(&cfg)
    }

    pub fn library_calculator(&self) -> &LibraryCalculator {
        &self.library
    }

    pub fn model_calculator(&self) -> &ModelCalculator {
        &self.model
    }

    pub fn report(&self, req: &ScoreRequest) -> ScoreReport {
        self.report_at(req, Utc::now())
    }

    /// Full report with an explicit clock for model recency.
    pub fn report_at(&self, req: &ScoreRequest, now: DateTime<Utc>) -> ScoreReport {
        ensure_metrics_described();
        let started = Instant::now();

        let library_metadata = LibraryMetadataSummary::from(&req.library);
        let llm_metadata = ModelMetadataSummary::from(&req.model);

        let (lcs, lgs, fs) = if req.versions.is_empty() {
            warn!(library = %req.library.name, model = %req.model.id, "no versions to score");
            (
                LibraryConfidenceOutput {
                    library_score: self.library.empty_breakdown(),
                    versions: Vec::new(),
                },
                ModelScoreReport {
                    score: 0.0,
                    breakdown: None,
                },
                FinalScoreOutput::empty(),
            )
        } else {
            let lcs = self
                .library
                .score_library(&req.library, &req.versions, &req.model);
            let model_score = self.model.score_at(&req.model, now);
            counter!("scoring_versions_scored_total").increment(lcs.versions.len() as u64);
            counter!("scoring_models_scored_total").increment(1);
            let fs = calculate_final_scores(&lcs.versions, model_score.score);
            (lcs, report_model(model_score), fs)
        };

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        counter!("scoring_reports_total").increment(1);
        histogram!("scoring_report_duration_ms").record(elapsed_ms);
        info!(
            library = %req.library.name,
            platform = %req.platform,
            model = %req.model.id,
            versions = req.versions.len(),
            lgs = lgs.score,
            elapsed_ms,
            "score report assembled"
        );

        ScoreReport {
            library: req.library.name.clone(),
            platform: req.platform.clone(),
            llm: req.model.name.clone(),
            library_metadata,
            llm_metadata,
            lcs,
            lgs,
            fs,
        }
    }

    /// Final scores lifted onto the 0–100 scale, flagged for breaking
    /// releases and grouped by major version.
    pub fn buckets(&self, req: &ScoreRequest, report: &ScoreReport) -> Vec<VersionBucket> {
        let breaking = detect_breaking_changes(&req.versions);
        let breaking_by_key: HashMap<(&str, DateTime<Utc>), bool> = breaking
            .iter()
            .map(|b| ((b.version.as_str(), b.published_at), b.breaking))
            .collect();
        let scored = report
            .fs
            .versions
            .iter()
            .zip(report.lcs.versions.iter())
            .map(|(fs, vs)| {
                let is_breaking = breaking_by_key
                    .get(&(fs.version.as_str(), vs.release_date))
                    .copied()
                    .unwrap_or(false);
                ScoredVersion::from_final(fs, vs.release_date, is_breaking)
            })
            .collect();
        group_versions_into_buckets(scored)
    }
}

fn report_model(score: ModelScore) -> ModelScoreReport {
    ModelScoreReport {
        score: score.score,
        breakdown: Some(score.breakdown),
    }
}

/// Process-wide engine built from the default config on first use.
pub fn shared() -> Result<&'static ScoringEngine> {
    static ENGINE: OnceCell<ScoringEngine> = OnceCell::new();
    ENGINE.get_or_try_init(ScoringEngine::from_default_config)
}
