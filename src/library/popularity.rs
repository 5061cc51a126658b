//! Adoption as a proxy for training-data exposure.

use super::{LibraryContext, POPULARITY_ID};
use crate::aggregator::{Component, ScoreComponent};
use crate::normalize::normalize_log;

pub const DEFAULT_WEIGHT: f64 = 0.20;

const STARS_MAX: f64 = 100_000.0;
const DEPENDENTS_MAX: f64 = 10_000.0;
const STARS_SHARE: f64 = 0.4;
const DEPENDENTS_SHARE: f64 = 0.6;

/// Log-scaled stars and dependents; dependents weigh more as a harder
/// adoption signal.
#[derive(Debug, Clone, Copy)]
pub struct PopularityScore {
    weight: f64,
}

impl PopularityScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    pub fn blend(stars: u64, dependents: u64) -> f64 {
        let stars_score = normalize_log(stars as f64, STARS_MAX);
        let dependents_score = normalize_log(dependents as f64, DEPENDENTS_MAX);
        stars_score * STARS_SHARE + dependents_score * DEPENDENTS_SHARE
    }
}

impl Default for PopularityScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for PopularityScore {
    fn id(&self) -> &str {
        POPULARITY_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<LibraryContext<'a>> for PopularityScore {
    fn calculate(&self, ctx: &LibraryContext<'a>) -> f64 {
        Self::blend(ctx.library.stars, ctx.library.dependents_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_adoption_is_zero() {
        assert_eq!(PopularityScore::blend(0, 0), 0.0);
    }

    #[test]
    fn saturates_at_caps() {
        assert!((PopularityScore::blend(100_000, 10_000) - 1.0).abs() < 1e-12);
        assert!((PopularityScore::blend(5_000_000, 900_000) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dependents_outweigh_stars() {
        assert!((PopularityScore::blend(100_000, 0) - 0.4).abs() < 1e-12);
        assert!((PopularityScore::blend(0, 10_000) - 0.6).abs() < 1e-12);
    }
}
