//! Risk tiers on the 0–100 display scale.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const LOW_RISK_MIN: u8 = 70;
pub const MEDIUM_RISK_MIN: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "High reliability",
            RiskLevel::Medium => "May require adjustments",
            RiskLevel::High => "High risk of outdated responses",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier lower bounds are inclusive.
pub fn classify_risk(score: u8) -> RiskLevel {
    if score >= LOW_RISK_MIN {
        RiskLevel::Low
    } else if score >= MEDIUM_RISK_MIN {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
