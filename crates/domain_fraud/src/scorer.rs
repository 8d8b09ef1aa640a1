//! Heuristic fraud scorer
//!
//! Scoring is a total function: every claim yields a result, and absent or
//! malformed fields simply leave their rules unfired.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::AnalysisMethod;
use crate::claim::ClaimRecord;
use crate::risk::RiskLevel;
use crate::rules::{FraudRule, HEURISTIC_RULES};

/// Reasoning reported with every heuristic result
pub const HEURISTIC_REASONING: &str = "Rule-based analysis using predefined patterns";

/// Result of scoring one claim with the heuristic rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub method: AnalysisMethod,
    /// Sum of the weights of every rule that fired
    pub fraud_score: u32,
    pub risk_level: RiskLevel,
    /// Indicators of the fired rules, in rule order
    pub fraud_indicators: Vec<String>,
    pub reasoning: String,
}

impl ScoreResult {
    /// Returns true if no rule fired
    pub fn is_clean(&self) -> bool {
        self.fraud_indicators.is_empty()
    }
}

/// Scores claims against an ordered rule table
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    rules: Vec<FraudRule>,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicScorer {
    /// Creates a scorer over the standard rule table
    pub fn new() -> Self {
        Self::with_rules(HEURISTIC_RULES.to_vec())
    }

    /// Creates a scorer over a custom rule table
    pub fn with_rules(rules: impl Into<Vec<FraudRule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Returns the rule table in evaluation order
    pub fn rules(&self) -> &[FraudRule] {
        &self.rules
    }

    /// Returns the rules that fire for a claim, in evaluation order
    pub fn triggered_rules(&self, claim: &ClaimRecord) -> Vec<&FraudRule> {
        triggered(&self.rules, claim)
    }

    /// Scores a claim
    pub fn score(&self, claim: &ClaimRecord) -> ScoreResult {
        score_with(&self.rules, claim)
    }
}

/// Scores a claim against the standard heuristic rules
pub fn score(claim: &ClaimRecord) -> ScoreResult {
    score_with(&HEURISTIC_RULES, claim)
}

fn triggered<'r>(rules: &'r [FraudRule], claim: &ClaimRecord) -> Vec<&'r FraudRule> {
    rules.iter().filter(|rule| rule.applies_to(claim)).collect()
}

fn score_with(rules: &[FraudRule], claim: &ClaimRecord) -> ScoreResult {
    let fired = triggered(rules, claim);
    let fraud_score: u32 = fired.iter().map(|rule| rule.weight).sum();
    let risk_level = RiskLevel::from_score(fraud_score);

    debug!(
        claim_id = claim.reference(),
        fraud_score,
        %risk_level,
        rules_fired = fired.len(),
        "Scored claim with heuristic rules"
    );

    ScoreResult {
        method: AnalysisMethod::Heuristic,
        fraud_score,
        risk_level,
        fraud_indicators: fired.iter().map(|rule| rule.indicator.to_string()).collect(),
        reasoning: HEURISTIC_REASONING.to_string(),
    }
}
