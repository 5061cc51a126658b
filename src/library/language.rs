//! # Language Affinity
//!
//! Fixed mapping from a library's primary language to how heavily that
//! language is represented in general LLM pretraining corpora.
//!
//! - Case-insensitive lookup (surrounding whitespace ignored).
//! - A few spelling aliases (`c#`/`csharp`, `c++`/`cpp`).
//! - Unknown languages fall back to [`DEFAULT_AFFINITY`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{LibraryContext, LANGUAGE_ID};
use crate::aggregator::{Component, ScoreComponent};

pub const DEFAULT_WEIGHT: f64 = 0.10;
pub const DEFAULT_AFFINITY: f64 = 0.5;

static LANGUAGE_AFFINITY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (lang, score) in [
        ("javascript", 1.0),
        ("typescript", 1.0),
        ("python", 1.0),
        ("java", 0.9),
        ("go", 0.85),
        ("rust", 0.8),
        ("ruby", 0.8),
        ("php", 0.75),
        ("c#", 0.75),
        ("csharp", 0.75),
        ("swift", 0.7),
        ("kotlin", 0.7),
        ("c", 0.7),
        ("c++", 0.7),
        ("cpp", 0.7),
    ] {
        table.insert(lang, score);
    }
    table
});

/// Affinity for a language name; see module docs for matching rules.
pub fn affinity_for(language: &str) -> f64 {
    let key = language.trim().to_lowercase();
    LANGUAGE_AFFINITY
        .get(key.as_str())
        .copied()
        .unwrap_or(DEFAULT_AFFINITY)
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageAffinityScore {
    weight: f64,
}

impl LanguageAffinityScore {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for LanguageAffinityScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Component for LanguageAffinityScore {
    fn id(&self) -> &str {
        LANGUAGE_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<LibraryContext<'a>> for LanguageAffinityScore {
    fn calculate(&self, ctx: &LibraryContext<'a>) -> f64 {
        affinity_for(&ctx.library.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(affinity_for("python"), 1.0);
        assert_eq!(affinity_for("go"), 0.85);
        assert_eq!(affinity_for("kotlin"), 0.7);
    }

    #[test]
    fn case_insensitive_lookup() {
        assert_eq!(affinity_for("PYTHON"), affinity_for("python"));
        assert_eq!(affinity_for("TypeScript"), 1.0);
        assert_eq!(affinity_for("  Rust "), 0.8);
    }

    #[test]
    fn aliases_share_scores() {
        assert_eq!(affinity_for("C#"), affinity_for("CSharp"));
        assert_eq!(affinity_for("C++"), affinity_for("cpp"));
    }

    #[test]
    fn default_weight_used() {
        assert_eq!(affinity_for("Haskell"), DEFAULT_AFFINITY);
        assert_eq!(affinity_for(""), DEFAULT_AFFINITY);
        assert_eq!(affinity_for("unknown"), 0.5);
    }
}
