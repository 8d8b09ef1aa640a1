//! Fraud domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the fraud scoring domain
///
/// Scoring and aggregation never fail; these cover parsing claim and
/// analysis payloads and failures reported by analyzers.
#[derive(Debug, Error)]
pub enum FraudError {
    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("Invalid claim payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Analyzer failed: {0}")]
    Analyzer(#[from] PortError),
}
