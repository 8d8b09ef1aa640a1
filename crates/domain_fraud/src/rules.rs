//! Heuristic fraud rules
//!
//! Each rule is an independent predicate with a weight and an indicator
//! label. Rules are evaluated in table order and are purely additive: a
//! rule firing never suppresses or short-circuits another.
//!
//! | # | Condition                                   | Weight |
//! |---|---------------------------------------------|--------|
//! | 1 | policy started fewer than 30 days before     | 25     |
//! | 2 | claim amount above 20000                    | 20     |
//! | 3 | no police report                            | 15     |
//! | 4 | three or more previous claims               | 30     |
//! | 5 | filed more than 14 days after the incident   | 10     |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::claim::ClaimRecord;

/// Policies younger than this many days are considered recent
pub const RECENT_POLICY_DAYS: u32 = 30;

/// Claim amounts strictly above this are considered high
pub const HIGH_CLAIM_AMOUNT: Decimal = dec!(20000);

/// This many previous claims or more is considered a pattern
pub const MULTIPLE_PREVIOUS_CLAIMS: u32 = 3;

/// Filing delays strictly above this many days are considered late
pub const DELAYED_FILING_DAYS: u32 = 14;

/// A single weighted fraud rule
#[derive(Debug, Clone, Copy)]
pub struct FraudRule {
    /// Stable identifier for logs and tests
    pub code: &'static str,
    /// Points added to the fraud score when the rule fires
    pub weight: u32,
    /// Human-readable indicator reported when the rule fires
    pub indicator: &'static str,
    predicate: fn(&ClaimRecord) -> bool,
}

impl FraudRule {
    /// Creates a rule from its parts
    pub const fn new(
        code: &'static str,
        weight: u32,
        indicator: &'static str,
        predicate: fn(&ClaimRecord) -> bool,
    ) -> Self {
        Self {
            code,
            weight,
            indicator,
            predicate,
        }
    }

    /// Returns true if the rule fires for the claim
    pub fn applies_to(&self, claim: &ClaimRecord) -> bool {
        (self.predicate)(claim)
    }
}

/// The standard heuristic rule table, in evaluation order
pub static HEURISTIC_RULES: [FraudRule; 5] = [
    FraudRule::new("recent_policy", 25, "Policy recently started", policy_recently_started),
    FraudRule::new("high_amount", 20, "High claim amount", high_claim_amount),
    FraudRule::new("no_police_report", 15, "No police report", no_police_report),
    FraudRule::new("previous_claims", 30, "Multiple previous claims", multiple_previous_claims),
    FraudRule::new("delayed_filing", 10, "Delayed filing", delayed_filing),
];

/// Returns the score reached when every rule in the table fires
pub fn max_score(rules: &[FraudRule]) -> u32 {
    rules.iter().map(|rule| rule.weight).sum()
}

fn policy_recently_started(claim: &ClaimRecord) -> bool {
    claim.days_since_policy_start < RECENT_POLICY_DAYS
}

fn high_claim_amount(claim: &ClaimRecord) -> bool {
    claim.claim_amount > HIGH_CLAIM_AMOUNT
}

fn no_police_report(claim: &ClaimRecord) -> bool {
    claim.police_report_missing()
}

fn multiple_previous_claims(claim: &ClaimRecord) -> bool {
    claim.previous_claims_count >= MULTIPLE_PREVIOUS_CLAIMS
}

fn delayed_filing(claim: &ClaimRecord) -> bool {
    claim.filing_delay_days > DELAYED_FILING_DAYS
}
