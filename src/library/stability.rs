//! API volatility estimated from release cadence.

use super::{LibraryContext, STABILITY_ID};
use crate::aggregator::{Component, ScoreComponent};
use crate::normalize::{normalize_inverse, Range};

pub const DEFAULT_WEIGHT: f64 = 0.20;

/// Score for libraries with no measurable age.
const NEW_LIBRARY_SCORE: f64 = 0.5;
/// <=2 releases/year is stable, >=20 is volatile.
const RELEASES_PER_YEAR: Range = Range::new(2.0, 20.0);

/// Versions released on or before the model cutoff always score 1.0: the
/// training data already covers the release history, so cadence is moot.
#[derive(Debug, Clone, Copy)]
pub struct StabilityScore {
    weight: f64,
}

impl StabilityScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Cadence-only score, ignoring the cutoff bypass.
    pub fn cadence_score(release_count: u64, age_in_years: f64) -> f64 {
        if age_in_years <= 0.0 || !age_in_years.is_finite() {
            return NEW_LIBRARY_SCORE;
        }
        let releases_per_year = release_count as f64 / age_in_years;
        normalize_inverse(releases_per_year, RELEASES_PER_YEAR)
    }
}

impl Default for StabilityScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for StabilityScore {
    fn id(&self) -> &str {
        STABILITY_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<LibraryContext<'a>> for StabilityScore {
    fn calculate(&self, ctx: &LibraryContext<'a>) -> f64 {
        if ctx.version.release_date <= ctx.model.cutoff_date {
            return 1.0;
        }
        Self::cadence_score(ctx.library.release_count, ctx.library.age_in_years)
    }
}
