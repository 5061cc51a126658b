//! Display-scale (0–100) compatibility estimate for one version against a
//! model's approximate cutoff, with a human-readable reason.
//!
//! Piecewise on calendar months after the cutoff:
//! - at or before: `min(100, 85 + months_before * 0.5)`
//! - up to 6 months after: linear 70 → 50
//! - beyond: linear 40 → 10, flat from 12 months on
//!
//! A breaking release loses a further 15 points.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::normalize::{clamp, months_between};
use crate::risk::{classify_risk, RiskLevel};

const AT_CUTOFF_SCORE: f64 = 85.0;
const BEFORE_CUTOFF_STEP: f64 = 0.5;
const NEAR_WINDOW_MONTHS: i64 = 6;
const FAR_WINDOW_MONTHS: i64 = 12;
const BREAKING_PENALTY: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub score: u8,
    pub risk: RiskLevel,
    pub reason: String,
}

pub fn compute_compatibility(
    release_date: &DateTime<Utc>,
    breaking: bool,
    cutoff: &DateTime<Utc>,
) -> Compatibility {
    let diff = months_between(release_date, cutoff);

    let (mut score, mut reason) = if diff <= 0 {
        let before = -diff;
        let when = if before < 1 {
            "around".to_string()
        } else {
            format!("{before} months before")
        };
        (
            f64::min(100.0, AT_CUTOFF_SCORE + before as f64 * BEFORE_CUTOFF_STEP),
            format!(
                "Released {when} the LLM's training cutoff. \
                 The model likely has strong knowledge of this version."
            ),
        )
    } else if diff <= NEAR_WINDOW_MONTHS {
        let ratio = diff as f64 / NEAR_WINDOW_MONTHS as f64;
        (
            70.0 - ratio * 20.0,
            format!(
                "Released {diff} months after the LLM's training cutoff. \
                 The model may have partial knowledge of this version."
            ),
        )
    } else {
        let ratio = f64::min(
            (diff - NEAR_WINDOW_MONTHS) as f64 / (FAR_WINDOW_MONTHS - NEAR_WINDOW_MONTHS) as f64,
            1.0,
        );
        (
            40.0 - ratio * 30.0,
            format!(
                "Released {diff} months after the LLM's training cutoff. \
                 The model is unlikely to have reliable knowledge of this version."
            ),
        )
    };

    if breaking {
        score -= BREAKING_PENALTY;
        reason.push_str(
            " This is a breaking release, which increases the risk of outdated or incorrect responses.",
        );
    }

    let score = clamp(score, 0.0, 100.0).round() as u8;
    Compatibility {
        score,
        risk: classify_risk(score),
        reason,
    }
}
