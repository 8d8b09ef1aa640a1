//! Batch summary statistics
//!
//! A pure reduction over per-claim results. The reduction only counts and
//! sums, so the order of the input does not affect the outcome.

use serde::{Deserialize, Serialize};

use crate::analysis::ScoredClaim;
use crate::risk::RiskLevel;

/// Summary statistics over a batch of analyzed claims
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_claims_analyzed: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    /// Share of high-risk claims, 0 to 100
    pub high_risk_percentage: f64,
    pub average_fraud_score: f64,
    /// Mean over the results that carry a confidence; 0 if none do
    pub average_confidence: f64,
}

impl BatchSummary {
    /// Returns the count of claims in the given tier
    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high_risk_count,
            RiskLevel::Medium => self.medium_risk_count,
            RiskLevel::Low => self.low_risk_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_claims_analyzed == 0
    }
}

/// Summarizes a batch of per-claim results
pub fn summarize<T: ScoredClaim>(results: &[T]) -> BatchSummary {
    results.iter().collect()
}

impl<T: ScoredClaim> FromIterator<T> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Tally::default(), |mut tally, result| {
                tally.add(&result);
                tally
            })
            .finish()
    }
}

#[derive(Default)]
struct Tally {
    total: usize,
    high: usize,
    medium: usize,
    low: usize,
    score_sum: f64,
    confidence_sum: f64,
    confidence_count: usize,
}

impl Tally {
    fn add(&mut self, result: &impl ScoredClaim) {
        self.total += 1;
        match result.risk_level() {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
        self.score_sum += result.fraud_score();
        if let Some(confidence) = result.confidence() {
            self.confidence_sum += confidence;
            self.confidence_count += 1;
        }
    }

    fn finish(self) -> BatchSummary {
        if self.total == 0 {
            return BatchSummary::default();
        }

        let total = self.total as f64;
        BatchSummary {
            total_claims_analyzed: self.total,
            high_risk_count: self.high,
            medium_risk_count: self.medium,
            low_risk_count: self.low,
            high_risk_percentage: self.high as f64 / total * 100.0,
            average_fraud_score: self.score_sum / total,
            average_confidence: if self.confidence_count == 0 {
                0.0
            } else {
                self.confidence_sum / self.confidence_count as f64
            },
        }
    }
}
