//! Conceptual scope estimated from registry keywords.

use super::{LibraryContext, SIMPLICITY_ID};
use crate::aggregator::{Component, ScoreComponent};
use crate::normalize::{normalize_inverse, Range};

pub const DEFAULT_WEIGHT: f64 = 0.10;

/// Substrings that mark a keyword as signalling a large surface area.
pub const COMPLEX_KEYWORDS: &[&str] = &[
    "framework",
    "platform",
    "ecosystem",
    "full-stack",
    "fullstack",
    "enterprise",
    "monorepo",
    "suite",
    "sdk",
];

const COMPLEX_COUNT: Range = Range::new(0.0, 4.0);

#[derive(Debug, Clone, Copy)]
pub struct SimplicityScore {
    weight: f64,
}

impl SimplicityScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Number of keywords containing at least one complexity marker.
    pub fn complex_keyword_count<S: AsRef<str>>(keywords: &[S]) -> usize {
        keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| COMPLEX_KEYWORDS.iter().any(|marker| k.contains(marker)))
            .count()
    }
}

impl Default for SimplicityScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for SimplicityScore {
    fn id(&self) -> &str {
        SIMPLICITY_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<LibraryContext<'a>> for SimplicityScore {
    fn calculate(&self, ctx: &LibraryContext<'a>) -> f64 {
        let count = Self::complex_keyword_count(&ctx.library.keywords);
        normalize_inverse(count as f64, COMPLEX_COUNT)
    }
}
