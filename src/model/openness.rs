//! Openness: open weights plus a bonus for a known API-compatibility marker.

use super::{ModelContext, ModelMetadata, OPENNESS_ID};
use crate::aggregator::{Component, ScoreComponent};

pub const DEFAULT_WEIGHT: f64 = 0.10;

pub const DEFAULT_COMPAT_MARKERS: &[&str] = &["openai-compatible"];

const OPEN_WEIGHTS_SCORE: f64 = 0.7;
const COMPAT_BONUS: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct OpennessScore {
    weight: f64,
    markers: Vec<String>,
}

impl OpennessScore {
    pub fn new(weight: f64) -> Self {
        Self::with_markers(weight, DEFAULT_COMPAT_MARKERS.iter().map(|m| m.to_string()))
    }

    pub fn with_markers<I, S>(weight: f64, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            weight,
            markers: markers
                .into_iter()
                .map(|m| m.into().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    pub fn is_compatible(&self, model: &ModelMetadata) -> bool {
        let marker = model.api_compatibility.to_lowercase();
        self.markers.iter().any(|m| marker.contains(m.as_str()))
    }
}

impl Default for OpennessScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for OpennessScore {
    fn id(&self) -> &str {
        OPENNESS_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<ModelContext<'a>> for OpennessScore {
    fn calculate(&self, ctx: &ModelContext<'a>) -> f64 {
        let mut score = 0.0;
        if ctx.model.open_weights {
            score += OPEN_WEIGHTS_SCORE;
        }
        if self.is_compatible(ctx.model) {
            score += COMPAT_BONUS;
        }
        f64::min(score, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn run(score: &OpennessScore, model: &ModelMetadata) -> f64 {
        score.calculate(&ModelContext {
            model,
            now: Utc::now(),
        })
    }

    #[test]
    fn closed_model_scores_zero() {
        let m = ModelMetadata {
            api_compatibility: "@ai-sdk/anthropic".into(),
            ..Default::default()
        };
        assert_eq!(run(&OpennessScore::default(), &m), 0.0);
    }

    #[test]
    fn open_weights_alone() {
        let m = ModelMetadata {
            open_weights: true,
            ..Default::default()
        };
        assert_eq!(run(&OpennessScore::default(), &m), 0.7);
    }

    #[test]
    fn compat_marker_alone_is_case_insensitive() {
        let m = ModelMetadata {
            api_compatibility: "@ai-sdk/OpenAI-Compatible".into(),
            ..Default::default()
        };
        assert_eq!(run(&OpennessScore::default(), &m), 0.3);
    }

    #[test]
    fn both_signals_cap_at_one() {
        let m = ModelMetadata {
            open_weights: true,
            api_compatibility: "openai-compatible".into(),
            ..Default::default()
        };
        assert!((run(&OpennessScore::default(), &m) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn custom_markers_replace_defaults() {
        let score = OpennessScore::with_markers(0.1, ["ollama"]);
        let m = ModelMetadata {
            api_compatibility: "openai-compatible".into(),
            ..Default::default()
        };
        assert_eq!(run(&score, &m), 0.0);
        let m = ModelMetadata {
            api_compatibility: "ollama-api".into(),
            ..Default::default()
        };
        assert_eq!(run(&score, &m), 0.3);
    }
}
