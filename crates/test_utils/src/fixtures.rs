//! Pre-built Test Fixtures
//!
//! Ready-to-use claims and analyses with known heuristic outcomes.

use domain_fraud::analysis::ClaimAnalysis;
use domain_fraud::claim::ClaimRecord;
use rust_decimal_macros::dec;

use crate::builders::ClaimRecordBuilder;

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// No rule fires: score 0, LOW
    pub fn clean() -> ClaimRecord {
        ClaimRecordBuilder::new().with_claim_id("CLM-CLEAN").build()
    }

    /// Recent policy, high amount, no report: score 60, HIGH
    pub fn suspicious() -> ClaimRecord {
        ClaimRecordBuilder::new()
            .with_claim_id("CLM-SUSPICIOUS")
            .with_days_since_policy_start(5)
            .with_claim_amount(dec!(25000))
            .with_police_report("No")
            .with_filing_delay_days(5)
            .build()
    }

    /// Repeat claimant with a late filing: score 40, MEDIUM
    pub fn repeat_claimant() -> ClaimRecord {
        ClaimRecordBuilder::new()
            .with_claim_id("CLM-REPEAT")
            .repeat_claimant()
            .delayed_filing()
            .build()
    }

    /// Every rule fires: score 100, HIGH
    pub fn all_rules() -> ClaimRecord {
        ClaimRecordBuilder::new()
            .with_claim_id("CLM-ALL-RULES")
            .recent_policy()
            .high_amount()
            .no_police_report()
            .repeat_claimant()
            .delayed_filing()
            .build()
    }

    /// One claim of each tier
    pub fn mixed_batch() -> Vec<ClaimRecord> {
        vec![Self::clean(), Self::repeat_claimant(), Self::suspicious()]
    }
}

/// Fixture for analysis results shaped like remote analyzer output
pub struct AnalysisFixtures;

impl AnalysisFixtures {
    /// A confident high-risk verdict with several indicators
    pub fn high_risk(claim_id: &str) -> ClaimAnalysis {
        ClaimAnalysis::remote(Some(claim_id.to_string()), 82.5, 91.0)
            .with_indicators([
                "Claim filed five days after policy inception",
                "Total loss on a rear-end collision",
                "Cash payment requested",
                "No police report",
                "No witnesses",
                "Policyholder is a new customer",
            ])
            .with_reasoning("Several independent signals point to staged loss.")
            .with_recommendations(["Refer to special investigations unit"])
    }

    /// A confident low-risk verdict without indicators
    pub fn low_risk(claim_id: &str) -> ClaimAnalysis {
        ClaimAnalysis::remote(Some(claim_id.to_string()), 8.0, 88.0)
            .with_reasoning("Long-standing customer with a documented minor collision.")
    }
}
