//! Test Data Builders
//!
//! Builders start from a claim where no heuristic rule fires, so a test
//! only sets the fields it is exercising.

use chrono::NaiveDate;
use domain_fraud::claim::{ClaimDetails, ClaimRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test claims
pub struct ClaimRecordBuilder {
    claim: ClaimRecord,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a builder for a long-standing, small, reported, promptly filed claim
    pub fn new() -> Self {
        Self {
            claim: ClaimRecord {
                days_since_policy_start: 1461,
                claim_amount: dec!(8500),
                police_report_filed: "Yes".to_string(),
                previous_claims_count: 0,
                filing_delay_days: 1,
                details: ClaimDetails::default(),
            },
        }
    }

    /// Sets the claim identifier
    pub fn with_claim_id(mut self, id: impl Into<String>) -> Self {
        self.claim.details.claim_id = Some(id.into());
        self
    }

    /// Sets the days between policy start and incident
    pub fn with_days_since_policy_start(mut self, days: u32) -> Self {
        self.claim.days_since_policy_start = days;
        self
    }

    /// Sets the claim amount
    pub fn with_claim_amount(mut self, amount: Decimal) -> Self {
        self.claim.claim_amount = amount;
        self
    }

    /// Sets the police report answer
    pub fn with_police_report(mut self, answer: impl Into<String>) -> Self {
        self.claim.police_report_filed = answer.into();
        self
    }

    /// Sets the number of previous claims
    pub fn with_previous_claims(mut self, count: u32) -> Self {
        self.claim.previous_claims_count = count;
        self
    }

    /// Sets the filing delay
    pub fn with_filing_delay_days(mut self, days: u32) -> Self {
        self.claim.filing_delay_days = days;
        self
    }

    /// Sets the incident and filing dates
    pub fn with_dates(mut self, incident: NaiveDate, filing: NaiveDate) -> Self {
        self.claim.details.incident_date = Some(incident);
        self.claim.details.filing_date = Some(filing);
        self
    }

    /// Fires the recent policy rule
    pub fn recent_policy(self) -> Self {
        self.with_days_since_policy_start(5)
    }

    /// Fires the high amount rule
    pub fn high_amount(self) -> Self {
        self.with_claim_amount(dec!(25000))
    }

    /// Fires the missing police report rule
    pub fn no_police_report(self) -> Self {
        self.with_police_report("No")
    }

    /// Fires the previous claims rule
    pub fn repeat_claimant(self) -> Self {
        self.with_previous_claims(3)
    }

    /// Fires the delayed filing rule
    pub fn delayed_filing(self) -> Self {
        self.with_filing_delay_days(21)
    }

    /// Builds the claim
    pub fn build(self) -> ClaimRecord {
        self.claim
    }
}
