//! Final score: LCS × LGS per version.
//!
//! Multiplicative on purpose: a weak model score pulls down an otherwise
//! strong library score and vice versa.

use serde::Serialize;

use crate::library::VersionScore;
use crate::normalize::round2;

pub const FORMULA: &str = "LCS × LGS";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalVersionScore {
    pub version: String,
    #[serde(rename = "lcs")]
    pub library_score: f64,
    #[serde(rename = "lgs")]
    pub model_score: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalScoreOutput {
    pub versions: Vec<FinalVersionScore>,
    pub formula: &'static str,
}

impl FinalScoreOutput {
    pub fn empty() -> Self {
        Self {
            versions: Vec::new(),
            formula: FORMULA,
        }
    }
}

pub fn combine(library_score: f64, model_score: f64) -> f64 {
    round2(library_score * model_score)
}

pub fn calculate_final_scores(versions: &[VersionScore], model_score: f64) -> FinalScoreOutput {
    FinalScoreOutput {
        versions: versions
            .iter()
            .map(|v| FinalVersionScore {
                version: v.version.clone(),
                library_score: v.score,
                model_score,
                final_score: combine(v.score, model_score),
            })
            .collect(),
        formula: FORMULA,
    }
}
