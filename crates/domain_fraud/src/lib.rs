//! Claim Fraud Scoring Domain
//!
//! This crate scores insurance claims for fraud risk and summarizes the
//! results of a batch of analyses.
//!
//! # Flow
//!
//! ```text
//! ClaimRecord -> HeuristicScorer -> ScoreResult ─┐
//!             -> ClaimAnalyzer   -> ClaimAnalysis ┴-> BatchSummary
//! ```
//!
//! The heuristic scorer is a fixed, ordered table of additive rules. Other
//! analyzers (for example a hosted model) plug in through the
//! [`ports::ClaimAnalyzer`] port and feed the same aggregator.

pub mod claim;
pub mod rules;
pub mod risk;
pub mod scorer;
pub mod analysis;
pub mod summary;
pub mod ports;
pub mod batch;
pub mod comparison;
pub mod error;

pub use claim::{ClaimDetails, ClaimRecord};
pub use rules::{FraudRule, HEURISTIC_RULES};
pub use risk::RiskLevel;
pub use scorer::{score, HeuristicScorer, ScoreResult};
pub use analysis::{AnalysisMethod, ClaimAnalysis, ScoredClaim};
pub use summary::{summarize, BatchSummary};
pub use ports::{ClaimAnalyzer, HeuristicAnalyzer};
pub use batch::{run_batch_analysis, BatchAnalysis};
pub use comparison::{compare_batch, compare_claim, ClaimComparison, ComparisonReport};
pub use error::FraudError;
