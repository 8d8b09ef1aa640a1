//! Fraud Analysis Ports
//!
//! The `ClaimAnalyzer` port describes anything that can turn a claim into a
//! [`ClaimAnalysis`]: the in-process heuristic scorer, or a hosted model
//! reached over the network.
//!
//! ```rust,ignore
//! use domain_fraud::ports::{ClaimAnalyzer, HeuristicAnalyzer};
//! use std::sync::Arc;
//!
//! let analyzer: Arc<dyn ClaimAnalyzer> = Arc::new(HeuristicAnalyzer::new());
//! let analysis = analyzer.analyze_claim(&claim).await?;
//! ```
//!
//! Remote adapters may fail for connectivity, authentication, or rate-limit
//! reasons; they report those through [`PortError`] and callers decide
//! whether to retry (see [`PortError::is_transient`]).

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{DomainPort, PortError};

use crate::analysis::ClaimAnalysis;
use crate::claim::ClaimRecord;
use crate::scorer::HeuristicScorer;

/// Port for claim analyzers
#[async_trait]
pub trait ClaimAnalyzer: DomainPort {
    /// Short name used in logs and reports
    fn analyzer_name(&self) -> &str;

    /// Analyzes one claim
    async fn analyze_claim(&self, claim: &ClaimRecord) -> Result<ClaimAnalysis, PortError>;

    /// Analyzes claims in order, returning one result per claim
    ///
    /// The default implementation stops at the first failure.
    async fn batch_analyze_claims(&self, claims: &[ClaimRecord]) -> Result<Vec<ClaimAnalysis>, PortError> {
        let mut results = Vec::with_capacity(claims.len());
        for claim in claims {
            results.push(self.analyze_claim(claim).await?);
        }
        Ok(results)
    }
}

/// In-process adapter backed by the heuristic scorer
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    scorer: HeuristicScorer,
}

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(scorer: HeuristicScorer) -> Self {
        Self { scorer }
    }
}

impl DomainPort for HeuristicAnalyzer {}

#[async_trait]
impl ClaimAnalyzer for HeuristicAnalyzer {
    fn analyzer_name(&self) -> &str {
        "heuristic"
    }

    async fn analyze_claim(&self, claim: &ClaimRecord) -> Result<ClaimAnalysis, PortError> {
        debug!(claim_id = claim.reference(), analyzer = self.analyzer_name(), "Analyzing claim");
        let result = self.scorer.score(claim);
        Ok(ClaimAnalysis::from_score(result, claim.details.claim_id.clone()))
    }
}
