//! Breadth of declared model features: six binary signals, averaged.

use super::{ModelContext, ModelMetadata, CAPABILITY_ID};
use crate::aggregator::{Component, ScoreComponent};

pub const DEFAULT_WEIGHT: f64 = 0.30;

const SIGNAL_COUNT: f64 = 6.0;

#[derive(Debug, Clone, Copy)]
pub struct CapabilityScore {
    weight: f64,
}

impl CapabilityScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Number of capability signals the model declares (0..=6).
    pub fn signal_count(model: &ModelMetadata) -> usize {
        [
            model.reasoning,
            model.tool_call,
            model.structured_output,
            model.attachment,
            model.modalities.multimodal_input(),
            model.modalities.multimodal_output(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl Default for CapabilityScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for CapabilityScore {
    fn id(&self) -> &str {
        CAPABILITY_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<ModelContext<'a>> for CapabilityScore {
    fn calculate(&self, ctx: &ModelContext<'a>) -> f64 {
        Self::signal_count(ctx.model) as f64 / SIGNAL_COUNT
    }
}
