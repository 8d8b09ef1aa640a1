//! Analysis results shared by every analyzer
//!
//! Heuristic results and remote analyzer results differ mostly in that the
//! latter report a confidence. [`ScoredClaim`] is the view the aggregator
//! needs from either.

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;
use crate::scorer::ScoreResult;

/// How a result was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// Fixed rule table
    Heuristic,
    /// Hosted language model
    Ai,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::Heuristic => "heuristic",
            AnalysisMethod::Ai => "ai",
        }
    }
}

fn remote_method() -> AnalysisMethod {
    AnalysisMethod::Ai
}

/// Result of analyzing one claim, in the shape remote analyzers return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAnalysis {
    #[serde(default = "remote_method")]
    pub method: AnalysisMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    pub fraud_score: f64,
    pub risk_level: RiskLevel,
    /// Self-reported certainty, 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub fraud_indicators: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl ClaimAnalysis {
    /// Wraps a heuristic result, attaching the claim it was computed for
    pub fn from_score(result: ScoreResult, claim_id: Option<String>) -> Self {
        Self {
            method: result.method,
            claim_id,
            fraud_score: f64::from(result.fraud_score),
            risk_level: result.risk_level,
            confidence: None,
            fraud_indicators: result.fraud_indicators,
            reasoning: result.reasoning,
            recommendations: Vec::new(),
        }
    }

    /// Builds a remote analysis, deriving the tier from the score
    pub fn remote(claim_id: Option<String>, fraud_score: f64, confidence: f64) -> Self {
        Self {
            method: AnalysisMethod::Ai,
            claim_id,
            fraud_score,
            risk_level: RiskLevel::from_fractional_score(fraud_score),
            confidence: Some(confidence),
            fraud_indicators: Vec::new(),
            reasoning: String::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_indicators(mut self, indicators: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fraud_indicators = indicators.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_recommendations(mut self, recommendations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.recommendations = recommendations.into_iter().map(Into::into).collect();
        self
    }

    /// Returns up to `limit` indicators and the number left out
    pub fn indicator_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.fraud_indicators.len().min(limit);
        (&self.fraud_indicators[..shown], self.fraud_indicators.len() - shown)
    }
}

impl From<ScoreResult> for ClaimAnalysis {
    fn from(result: ScoreResult) -> Self {
        ClaimAnalysis::from_score(result, None)
    }
}

/// The fields the batch aggregator reads from a per-claim result
pub trait ScoredClaim {
    fn fraud_score(&self) -> f64;

    fn risk_level(&self) -> RiskLevel;

    /// Only remote analyzers report a confidence
    fn confidence(&self) -> Option<f64> {
        None
    }
}

impl ScoredClaim for ScoreResult {
    fn fraud_score(&self) -> f64 {
        f64::from(self.fraud_score)
    }

    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

impl ScoredClaim for ClaimAnalysis {
    fn fraud_score(&self) -> f64 {
        self.fraud_score
    }

    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    fn confidence(&self) -> Option<f64> {
        self.confidence
    }
}

impl<T: ScoredClaim + ?Sized> ScoredClaim for &T {
    fn fraud_score(&self) -> f64 {
        (**self).fraud_score()
    }

    fn risk_level(&self) -> RiskLevel {
        (**self).risk_level()
    }

    fn confidence(&self) -> Option<f64> {
        (**self).confidence()
    }
}
