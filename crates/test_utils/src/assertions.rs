//! Custom Test Assertions
//!
//! Assertion helpers for fraud results that give more meaningful failure
//! messages than standard assertions.

use domain_fraud::rules::HEURISTIC_RULES;
use domain_fraud::summary::BatchSummary;

/// Asserts that two floats are equal within a tolerance
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that indicators are standard rule indicators appearing in rule order
pub fn assert_indicators_in_rule_order(indicators: &[String]) {
    let positions: Vec<usize> = indicators
        .iter()
        .map(|indicator| {
            HEURISTIC_RULES
                .iter()
                .position(|rule| rule.indicator == indicator.as_str())
                .unwrap_or_else(|| panic!("Unknown indicator: {indicator}"))
        })
        .collect();

    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "Indicators out of rule order: {:?}",
        indicators
    );
}

/// Asserts that tier counts add up to the total
pub fn assert_summary_consistent(summary: &BatchSummary) {
    let counted = summary.high_risk_count + summary.medium_risk_count + summary.low_risk_count;
    assert_eq!(
        counted, summary.total_claims_analyzed,
        "Tier counts ({}) do not add up to total ({})",
        counted, summary.total_claims_analyzed
    );
    assert!(
        (0.0..=100.0).contains(&summary.high_risk_percentage),
        "High risk percentage out of range: {}",
        summary.high_risk_percentage
    );
}
