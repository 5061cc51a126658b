use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::{
    CapabilityScore, LimitScore, ModelComponent, ModelContext, ModelMetadata, ModelRecencyScore,
    ModelScoreBreakdown, OpennessScore, CAPABILITY_ID, LIMIT_ID, OPENNESS_ID, RECENCY_ID,
};
use crate::aggregator::{AggregatorResult, ComponentInfo, WeightedScoreAggregator};
use crate::config::{ModelWeights, ScoringConfig};
use crate::error::Result;
use crate::library::ComponentResult;
use crate::normalize::round2;

/// Model capability score with attribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelScore {
    /// Rounded to two decimals.
    pub score: f64,
    pub breakdown: ModelScoreBreakdown,
}

/// LGS calculator. Build once and share.
#[derive(Debug)]
pub struct ModelCalculator {
    aggregator: WeightedScoreAggregator<ModelComponent>,
    weights: ModelWeights,
}

impl ModelCalculator {
    pub fn new() -> Result<Self> {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn from_config(cfg: &ScoringConfig) -> Result<Self> {
        let weights = cfg.model;
        let components: Vec<Box<ModelComponent>> = vec![
            Box::new(CapabilityScore::new(weights.capability)),
            Box::new(LimitScore::new(weights.limit)),
            Box::new(ModelRecencyScore::new(
                weights.recency,
                cfg.model_recency.reference_start,
            )),
            Box::new(OpennessScore::with_markers(
                weights.openness,
                cfg.openness.markers.iter().cloned(),
            )),
        ];
        let aggregator = WeightedScoreAggregator::new("model_capability", components)?;
        Ok(Self {
            aggregator,
            weights,
        })
    }

    pub fn weights(&self) -> ModelWeights {
        self.weights
    }

    pub fn component_info(&self) -> Vec<ComponentInfo> {
        self.aggregator.component_info()
    }

    /// Score against the current clock.
    pub fn score(&self, model: &ModelMetadata) -> ModelScore {
        self.score_at(model, Utc::now())
    }

    /// Score with an explicit "now", the upper end of the recency range.
    pub fn score_at(&self, model: &ModelMetadata, now: DateTime<Utc>) -> ModelScore {
        let result = self.aggregator.calculate(&ModelContext { model, now });
        let breakdown = ModelScoreBreakdown {
            capability: component(&result, CAPABILITY_ID, self.weights.capability),
            limit: component(&result, LIMIT_ID, self.weights.limit),
            recency: component(&result, RECENCY_ID, self.weights.recency),
            openness: component(&result, OPENNESS_ID, self.weights.openness),
        };
        let score = round2(result.score);

        debug!(
            model = %model.id,
            capability = breakdown.capability.value,
            limit = breakdown.limit.value,
            recency = breakdown.recency.value,
            openness = breakdown.openness.value,
            score,
            "scored model"
        );

        ModelScore { score, breakdown }
    }
}

fn component(result: &AggregatorResult, id: &str, weight: f64) -> ComponentResult {
    result
        .get(id)
        .map(ComponentResult::from)
        .unwrap_or_else(|| ComponentResult::empty(weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;
    use crate::model::Modalities;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
    }

    fn frontier_model() -> ModelMetadata {
        let cutoff = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        ModelMetadata {
            reasoning: true,
            tool_call: true,
            structured_output: true,
            attachment: true,
            modalities: Modalities {
                input: vec!["text".into(), "image".into()],
                output: vec!["text".into(), "audio".into()],
            },
            context_limit: 2_000_000,
            output_limit: 200_000,
            last_updated: Some(cutoff),
            open_weights: true,
            api_compatibility: "openai-compatible".into(),
            ..ModelMetadata::with_cutoff("frontier", cutoff)
        }
    }

    #[test]
    fn default_weights_sum_to_one() {
        let calc = ModelCalculator::new().unwrap();
        let total: f64 = calc.component_info().iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        let ids: Vec<_> = calc.component_info().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["capability", "limit", "recency", "openness"]);
    }

    #[test]
    fn historical_openness_weight_is_rejected() {
        let mut cfg = ScoringConfig::default();
        cfg.model.openness = 0.15;
        let err = ModelCalculator::from_config(&cfg).unwrap_err();
        match err {
            ScoringError::InvalidWeights { set, total } => {
                assert_eq!(set, "model_capability");
                assert!((total - 1.05).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fully_featured_model_scores_one() {
        let calc = ModelCalculator::new().unwrap();
        let s = calc.score_at(&frontier_model(), now());
        assert_eq!(s.score, 1.0);
        assert_eq!(s.breakdown.capability.value, 1.0);
        assert_eq!(s.breakdown.openness.weight, 0.10);
    }

    #[test]
    fn bare_model_keeps_neutral_recency() {
        let calc = ModelCalculator::new().unwrap();
        let m = ModelMetadata {
            id: "bare".into(),
            ..Default::default()
        };
        let s = calc.score_at(&m, now());
        assert_eq!(s.breakdown.capability.value, 0.0);
        assert_eq!(s.breakdown.limit.value, 0.0);
        assert!((s.breakdown.recency.value - 0.3).abs() < 1e-12);
        assert_eq!(s.breakdown.openness.value, 0.0);
        // 0.3 * 0.4
        assert_eq!(s.score, 0.12);
    }

    #[test]
    fn custom_markers_flow_from_config() {
        let mut cfg = ScoringConfig::default();
        cfg.openness.markers = vec!["ollama".into()];
        let calc = ModelCalculator::from_config(&cfg).unwrap();
        let m = ModelMetadata {
            api_compatibility: "ollama".into(),
            ..Default::default()
        };
        assert_eq!(calc.score_at(&m, now()).breakdown.openness.value, 0.3);
    }
}
