//! Heuristic versus analyzer comparison
//!
//! Every claim is scored with the heuristic rules and sent to an analyzer.
//! An analyzer failure is recorded on the comparison rather than aborting
//! it, so one unreachable remote call does not hide the rest of a batch.

use serde::Serialize;
use tracing::{info, warn};

use core_kernel::BatchId;

use crate::analysis::ClaimAnalysis;
use crate::claim::ClaimRecord;
use crate::ports::ClaimAnalyzer;
use crate::scorer::{score, ScoreResult};
use crate::summary::BatchSummary;

/// Heuristic and analyzer results for one claim
#[derive(Debug, Clone, Serialize)]
pub struct ClaimComparison {
    pub claim_id: Option<String>,
    pub heuristic: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ClaimAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer_error: Option<String>,
}

impl ClaimComparison {
    /// Analyzer score minus heuristic score
    pub fn score_delta(&self) -> Option<f64> {
        self.analysis
            .as_ref()
            .map(|analysis| analysis.fraud_score - f64::from(self.heuristic.fraud_score))
    }

    /// Whether both methods put the claim in the same tier
    pub fn tiers_agree(&self) -> Option<bool> {
        self.analysis
            .as_ref()
            .map(|analysis| analysis.risk_level == self.heuristic.risk_level)
    }

    pub fn analyzer_failed(&self) -> bool {
        self.analyzer_error.is_some()
    }
}

/// Comparison results over a batch of claims
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub batch_id: BatchId,
    pub analyzer: String,
    /// One comparison per input claim, in input order
    pub comparisons: Vec<ClaimComparison>,
    pub heuristic_summary: BatchSummary,
    /// Summary over the claims the analyzer answered for
    pub analyzer_summary: BatchSummary,
    pub analyzer_failures: usize,
}

impl ComparisonReport {
    /// Percentage of answered claims where both methods agree on the tier
    pub fn tier_agreement_rate(&self) -> f64 {
        let verdicts: Vec<bool> = self
            .comparisons
            .iter()
            .filter_map(ClaimComparison::tiers_agree)
            .collect();
        if verdicts.is_empty() {
            return 0.0;
        }
        let agreed = verdicts.iter().filter(|agree| **agree).count();
        agreed as f64 / verdicts.len() as f64 * 100.0
    }
}

/// Compares the heuristic score of a claim with an analyzer's result
pub async fn compare_claim<A>(analyzer: &A, claim: &ClaimRecord) -> ClaimComparison
where
    A: ClaimAnalyzer + ?Sized,
{
    let heuristic = score(claim);
    let (analysis, analyzer_error) = match analyzer.analyze_claim(claim).await {
        Ok(analysis) => (Some(analysis), None),
        Err(error) => {
            warn!(
                claim_id = claim.reference(),
                analyzer = analyzer.analyzer_name(),
                transient = error.is_transient(),
                retry_after_secs = error.retry_after().map(|wait| wait.as_secs()),
                %error,
                "Analyzer failed, keeping heuristic result only"
            );
            (None, Some(error.to_string()))
        }
    };

    ClaimComparison {
        claim_id: claim.details.claim_id.clone(),
        heuristic,
        analysis,
        analyzer_error,
    }
}

/// Compares every claim in order and summarizes both sides
pub async fn compare_batch<A>(analyzer: &A, claims: &[ClaimRecord]) -> ComparisonReport
where
    A: ClaimAnalyzer + ?Sized,
{
    let batch_id = BatchId::new_v7();
    info!(%batch_id, analyzer = analyzer.analyzer_name(), claims = claims.len(), "Starting comparison");

    let mut comparisons = Vec::with_capacity(claims.len());
    for claim in claims {
        comparisons.push(compare_claim(analyzer, claim).await);
    }

    let heuristic_summary: BatchSummary = comparisons.iter().map(|c| &c.heuristic).collect();
    let analyzer_summary: BatchSummary = comparisons.iter().filter_map(|c| c.analysis.as_ref()).collect();
    let analyzer_failures = comparisons.iter().filter(|c| c.analyzer_failed()).count();

    info!(%batch_id, analyzer_failures, "Comparison complete");

    ComparisonReport {
        batch_id,
        analyzer: analyzer.analyzer_name().to_string(),
        comparisons,
        heuristic_summary,
        analyzer_summary,
        analyzer_failures,
    }
}
