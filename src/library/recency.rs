//! Release timing relative to the model's knowledge cutoff.
//!
//! Centered on 0.5 at the cutoff month: versions released up to 24 months
//! earlier climb linearly to 1.0, versions released after decay to 0.0 over
//! 12 months.

use super::{LibraryContext, RECENCY_ID};
use crate::aggregator::{Component, ScoreComponent};
use crate::normalize::{clamp01, months_between, normalize, Range};

pub const DEFAULT_WEIGHT: f64 = 0.40;

const BEFORE_CUTOFF_SPAN: Range = Range::new(0.0, 24.0);
const AFTER_CUTOFF_SPAN: Range = Range::new(0.0, 12.0);

#[derive(Debug, Clone, Copy)]
pub struct RecencyRiskScore {
    weight: f64,
}

impl RecencyRiskScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Score for a signed calendar-month offset (positive = after cutoff).
    pub fn score_for_months(months_diff: i64) -> f64 {
        let diff = months_diff as f64;
        if months_diff <= 0 {
            clamp01(0.5 + normalize(diff.abs(), BEFORE_CUTOFF_SPAN) * 0.5)
        } else {
            clamp01(0.5 - normalize(diff, AFTER_CUTOFF_SPAN) * 0.5)
        }
    }
}

impl Default for RecencyRiskScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for RecencyRiskScore {
    fn id(&self) -> &str {
        RECENCY_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<LibraryContext<'a>> for RecencyRiskScore {
    fn calculate(&self, ctx: &LibraryContext<'a>) -> f64 {
        let months_diff = months_between(&ctx.version.release_date, &ctx.model.cutoff_date);
        Self::score_for_months(months_diff)
    }
}
