//! Operational capacity from the context window and output limit.

use super::{ModelContext, LIMIT_ID};
use crate::aggregator::{Component, ScoreComponent};
use crate::normalize::normalize_log;

pub const DEFAULT_WEIGHT: f64 = 0.20;

const CONTEXT_MAX: f64 = 2_000_000.0;
const OUTPUT_MAX: f64 = 200_000.0;

#[derive(Debug, Clone, Copy)]
pub struct LimitScore {
    weight: f64,
}

impl LimitScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Log-scaled so very large windows do not dominate.
    pub fn blend(context_limit: u64, output_limit: u64) -> f64 {
        let context_score = normalize_log(context_limit as f64, CONTEXT_MAX);
        let output_score = normalize_log(output_limit as f64, OUTPUT_MAX);
        context_score * 0.6 + output_score * 0.4
    }
}

impl Default for LimitScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for LimitScore {
    fn id(&self) -> &str {
        LIMIT_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<ModelContext<'a>> for LimitScore {
    fn calculate(&self, ctx: &ModelContext<'a>) -> f64 {
        Self::blend(ctx.model.context_limit, ctx.model.output_limit)
    }
}
