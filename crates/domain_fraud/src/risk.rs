//! Risk tiers derived from fraud scores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FraudError;

/// Scores at or above this are high risk
pub const HIGH_RISK_THRESHOLD: u32 = 60;

/// Scores at or above this (and below the high threshold) are medium risk
pub const MEDIUM_RISK_THRESHOLD: u32 = 30;

/// Coarse three-tier fraud risk classification
///
/// Ordered from least to most risky, so `RiskLevel::High > RiskLevel::Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Maps an integer fraud score to its tier
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Maps a fractional score (as reported by remote analyzers) to its tier
    pub fn from_fractional_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD as f64 {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD as f64 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = FraudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("high") {
            Ok(RiskLevel::High)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(RiskLevel::Medium)
        } else if s.eq_ignore_ascii_case("low") {
            Ok(RiskLevel::Low)
        } else {
            Err(FraudError::InvalidRiskLevel(s.to_string()))
        }
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = FraudError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}
