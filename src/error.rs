//! Error types for the scoring engine

use thiserror::Error;

/// Errors raised while building or configuring a scorer.
///
/// Scoring itself never fails: bad component output is clamped and missing
/// optional signals fall back to neutral defaults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// A component set whose weights do not sum to 1.0 (±0.001)
    #[error("component weights for `{set}` must sum to 1.0, got {total:.3}")]
    InvalidWeights { set: String, total: f64 },

    /// A single component weight outside (0, 1]
    #[error("weight of `{id}` in `{set}` must be in (0, 1], got {weight}")]
    InvalidWeight { set: String, id: String, weight: f64 },

    /// Configuration could not be loaded or parsed
    #[error("scoring configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for ScoringError {
    fn from(err: anyhow::Error) -> Self {
        ScoringError::Config(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
