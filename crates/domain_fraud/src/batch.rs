//! Batch analysis
//!
//! Runs an analyzer over a batch of claims and summarizes the results.

use serde::Serialize;
use tracing::info;

use core_kernel::BatchId;

use crate::analysis::ClaimAnalysis;
use crate::claim::ClaimRecord;
use crate::error::FraudError;
use crate::ports::ClaimAnalyzer;
use crate::summary::{summarize, BatchSummary};

/// Results of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchAnalysis {
    pub batch_id: BatchId,
    pub analyzer: String,
    /// One result per input claim, in input order
    pub results: Vec<ClaimAnalysis>,
    pub summary: BatchSummary,
}

/// Analyzes every claim and summarizes the results
///
/// # Errors
///
/// Returns `FraudError::Analyzer` if the analyzer fails on any claim.
pub async fn run_batch_analysis<A>(analyzer: &A, claims: &[ClaimRecord]) -> Result<BatchAnalysis, FraudError>
where
    A: ClaimAnalyzer + ?Sized,
{
    let batch_id = BatchId::new_v7();
    info!(%batch_id, analyzer = analyzer.analyzer_name(), claims = claims.len(), "Starting batch analysis");

    let results = analyzer.batch_analyze_claims(claims).await?;
    let summary = summarize(&results);

    info!(
        %batch_id,
        high_risk = summary.high_risk_count,
        average_fraud_score = summary.average_fraud_score,
        "Batch analysis complete"
    );

    Ok(BatchAnalysis {
        batch_id,
        analyzer: analyzer.analyzer_name().to_string(),
        results,
        summary,
    })
}
