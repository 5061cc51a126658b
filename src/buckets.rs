//! Groups scored versions by major key.
//!
//! Ordering policy:
//! - members: score descending, ties keep input order
//! - representative: best member score
//! - buckets: best score descending, ties by major descending

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::compatibility::compute_compatibility;
use crate::final_score::FinalVersionScore;
use crate::risk::{classify_risk, RiskLevel};
use crate::version::major_of;

/// A version with its 0–100 display score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredVersion {
    pub version: String,
    pub release_date: DateTime<Utc>,
    pub breaking: bool,
    pub score: u8,
    pub risk: RiskLevel,
    pub reason: String,
}

impl ScoredVersion {
    /// Score with the cutoff-distance compatibility heuristic.
    pub fn from_compatibility(
        version: impl Into<String>,
        release_date: DateTime<Utc>,
        breaking: bool,
        cutoff: &DateTime<Utc>,
    ) -> Self {
        let c = compute_compatibility(&release_date, breaking, cutoff);
        Self {
            version: version.into(),
            release_date,
            breaking,
            score: c.score,
            risk: c.risk,
            reason: c.reason,
        }
    }

    /// Lift a final LCS × LGS score onto the display scale.
    pub fn from_final(fs: &FinalVersionScore, release_date: DateTime<Utc>, breaking: bool) -> Self {
        let score = (fs.final_score.clamp(0.0, 1.0) * 100.0).round() as u8;
        let risk = classify_risk(score);
        Self {
            version: fs.version.clone(),
            release_date,
            breaking,
            score,
            risk,
            reason: format!(
                "LCS {:.2} × LGS {:.2} = {:.2}. {}.",
                fs.library_score,
                fs.model_score,
                fs.final_score,
                risk.label()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionBucket {
    pub major: u64,
    pub best_score: u8,
    pub versions: Vec<ScoredVersion>,
}

/// Every input version lands in exactly one bucket.
pub fn group_versions_into_buckets(versions: Vec<ScoredVersion>) -> Vec<VersionBucket> {
    let mut by_major: BTreeMap<u64, Vec<ScoredVersion>> = BTreeMap::new();
    for v in versions {
        by_major.entry(major_of(&v.version)).or_default().push(v);
    }

    let mut buckets: Vec<VersionBucket> = by_major
        .into_iter()
        .map(|(major, mut members)| {
            members.sort_by_key(|v| Reverse(v.score));
            let best_score = members.first().map(|v| v.score).unwrap_or(0);
            VersionBucket {
                major,
                best_score,
                versions: members,
            }
        })
        .collect();

    buckets.sort_by_key(|b| (Reverse(b.best_score), Reverse(b.major)));
    buckets
}
