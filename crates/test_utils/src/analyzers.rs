//! Scripted Analyzer Adapters
//!
//! Stand-ins for a remote claim analyzer. Responses are keyed by claim id;
//! claims without a scripted response are answered by the heuristic scorer
//! with a fixed confidence attached.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};
use domain_fraud::analysis::{AnalysisMethod, ClaimAnalysis};
use domain_fraud::claim::ClaimRecord;
use domain_fraud::ports::ClaimAnalyzer;
use domain_fraud::scorer::score;

enum Scripted {
    Answer(ClaimAnalysis),
    Unavailable,
    RateLimited(u64),
    TimedOut(Duration),
}

/// Analyzer returning scripted results per claim id
pub struct ScriptedAnalyzer {
    responses: HashMap<String, Scripted>,
    fallback_confidence: f64,
    calls: AtomicUsize,
}

impl Default for ScriptedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedAnalyzer {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback_confidence: 75.0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answers the claim with the given analysis
    pub fn answering(mut self, claim_id: &str, analysis: ClaimAnalysis) -> Self {
        self.responses.insert(claim_id.to_string(), Scripted::Answer(analysis));
        self
    }

    /// Fails the claim as if the service were down
    pub fn unavailable_for(mut self, claim_id: &str) -> Self {
        self.responses.insert(claim_id.to_string(), Scripted::Unavailable);
        self
    }

    /// Fails the claim as if the rate limit were hit
    pub fn rate_limited_for(mut self, claim_id: &str, retry_after_secs: u64) -> Self {
        self.responses
            .insert(claim_id.to_string(), Scripted::RateLimited(retry_after_secs));
        self
    }

    /// Fails the claim as if the call ran past `elapsed`
    pub fn timed_out_for(mut self, claim_id: &str, elapsed: Duration) -> Self {
        self.responses.insert(claim_id.to_string(), Scripted::TimedOut(elapsed));
        self
    }

    /// Confidence attached to fallback answers
    pub fn with_fallback_confidence(mut self, confidence: f64) -> Self {
        self.fallback_confidence = confidence;
        self
    }

    /// Number of analyze calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DomainPort for ScriptedAnalyzer {}

#[async_trait]
impl ClaimAnalyzer for ScriptedAnalyzer {
    fn analyzer_name(&self) -> &str {
        "scripted"
    }

    async fn analyze_claim(&self, claim: &ClaimRecord) -> Result<ClaimAnalysis, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(claim.reference()) {
            Some(Scripted::Answer(analysis)) => Ok(analysis.clone()),
            Some(Scripted::Unavailable) => Err(PortError::ServiceUnavailable {
                service: "scripted-model".to_string(),
            }),
            Some(Scripted::RateLimited(retry_after_secs)) => Err(PortError::RateLimited {
                retry_after_secs: *retry_after_secs,
            }),
            Some(Scripted::TimedOut(elapsed)) => Err(PortError::timeout("analyze_claim", *elapsed)),
            None => {
                let mut analysis =
                    ClaimAnalysis::from_score(score(claim), claim.details.claim_id.clone());
                analysis.method = AnalysisMethod::Ai;
                analysis.confidence = Some(self.fallback_confidence);
                Ok(analysis)
            }
        }
    }
}
