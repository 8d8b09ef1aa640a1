//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims and analyses.

use domain_fraud::analysis::ClaimAnalysis;
use domain_fraud::claim::ClaimRecord;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for police report answers, including odd casing and blanks
pub fn police_report_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Yes".to_string()),
        Just("No".to_string()),
        Just("no".to_string()),
        Just("NO".to_string()),
        Just(String::new()),
    ]
}

/// Strategy for claim amounts from 0.00 to 100,000.00
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for arbitrary claims
pub fn claim_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        0u32..3000u32,
        claim_amount_strategy(),
        police_report_strategy(),
        0u32..8u32,
        0u32..90u32,
    )
        .prop_map(|(days, amount, report, previous, delay)| ClaimRecord {
            days_since_policy_start: days,
            claim_amount: amount,
            police_report_filed: report,
            previous_claims_count: previous,
            filing_delay_days: delay,
            ..Default::default()
        })
}

/// Strategy for claims where no heuristic rule fires
pub fn clean_claim_strategy() -> impl Strategy<Value = ClaimRecord> {
    (30u32..3000u32, 0i64..=2_000_000i64, 0u32..3u32, 0u32..=14u32).prop_map(
        |(days, cents, previous, delay)| ClaimRecord {
            days_since_policy_start: days,
            claim_amount: Decimal::new(cents, 2),
            police_report_filed: "Yes".to_string(),
            previous_claims_count: previous,
            filing_delay_days: delay,
            ..Default::default()
        },
    )
}

/// Strategy for remote analyses with a score and confidence in 0..=100
pub fn remote_analysis_strategy() -> impl Strategy<Value = ClaimAnalysis> {
    (0u32..=1000u32, 0u32..=1000u32).prop_map(|(score, confidence)| {
        ClaimAnalysis::remote(None, f64::from(score) / 10.0, f64::from(confidence) / 10.0)
    })
}
