// src/config.rs
//! Scoring configuration (TOML).
//!
//! Shape (every key optional, defaults shown):
//! ```toml
//! [library]
//! recency = 0.40
//! stability = 0.20
//! popularity = 0.20
//! simplicity = 0.10
//! language = 0.10
//!
//! [model]
//! capability = 0.30
//! limit = 0.20
//! recency = 0.40
//! openness = 0.10
//!
//! [model_recency]
//! reference_start = "2020-01-01"
//!
//! [openness]
//! markers = ["openai-compatible"]
//! ```
//!
//! Weights are not validated here. Building a calculator from the config
//! checks each weight set and fails fast with `ScoringError::InvalidWeights`.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{library, model};

pub const ENV_SCORING_CONFIG_PATH: &str = "SCORING_CONFIG_PATH";
pub const DEFAULT_SCORING_CONFIG_PATH: &str = "config/scoring.toml";

/// LCS component weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryWeights {
    pub recency: f64,
    pub stability: f64,
    pub popularity: f64,
    pub simplicity: f64,
    pub language: f64,
}

impl Default for LibraryWeights {
    fn default() -> Self {
        Self {
            recency: library::recency::DEFAULT_WEIGHT,
            stability: library::stability::DEFAULT_WEIGHT,
            popularity: library::popularity::DEFAULT_WEIGHT,
            simplicity: library::simplicity::DEFAULT_WEIGHT,
            language: library::language::DEFAULT_WEIGHT,
        }
    }
}

/// Model capability component weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelWeights {
    pub capability: f64,
    pub limit: f64,
    pub recency: f64,
    pub openness: f64,
}

impl Default for ModelWeights {
    fn default() -> Self {
        Self {
            capability: model::capability::DEFAULT_WEIGHT,
            limit: model::limit::DEFAULT_WEIGHT,
            recency: model::recency::DEFAULT_WEIGHT,
            openness: model::openness::DEFAULT_WEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelRecencyConfig {
    /// Start of the month range a model's cutoff/update dates are scored on.
    pub reference_start: NaiveDate,
}

impl Default for ModelRecencyConfig {
    fn default() -> Self {
        Self {
            reference_start: model::recency::default_reference_start(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpennessConfig {
    /// Substrings of the API-compatibility marker that earn the compatibility bonus.
    pub markers: Vec<String>,
}

impl Default for OpennessConfig {
    fn default() -> Self {
        Self {
            markers: model::openness::DEFAULT_COMPAT_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub library: LibraryWeights,
    pub model: ModelWeights,
    pub model_recency: ModelRecencyConfig,
    pub openness: OpennessConfig,
}

impl ScoringConfig {
    /// Parse a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ScoringConfig = toml::from_str(s).context("parsing scoring config")?;
        Ok(cfg)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scoring config from {}", path.display()))?;
        let cfg = Self::from_toml_str(&content)
            .with_context(|| format!("invalid scoring config at {}", path.display()))?;
        debug!(path = %path.display(), "loaded scoring config");
        Ok(cfg)
    }

    /// Load using env var + fallbacks:
    /// 1) $SCORING_CONFIG_PATH (must exist)
    /// 2) config/scoring.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_SCORING_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!(
                "{ENV_SCORING_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        let default_path = PathBuf::from(DEFAULT_SCORING_CONFIG_PATH);
        if default_path.exists() {
            return Self::load_from(&default_path);
        }
        warn!("no scoring config found, using built-in defaults");
        Ok(Self::default())
    }
}
