//! Comprehensive tests for domain_fraud

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_fraud::analysis::{AnalysisMethod, ClaimAnalysis};
use domain_fraud::claim::ClaimRecord;
use domain_fraud::risk::RiskLevel;
use domain_fraud::rules::HEURISTIC_RULES;
use domain_fraud::scorer::score;
use domain_fraud::summary::summarize;

/// A claim where no rule fires
fn clean_claim() -> ClaimRecord {
    ClaimRecord {
        days_since_policy_start: 1461,
        claim_amount: dec!(8500),
        police_report_filed: "Yes".to_string(),
        previous_claims_count: 0,
        filing_delay_days: 1,
        ..Default::default()
    }
}

/// A claim where every rule fires
fn flagged_claim() -> ClaimRecord {
    ClaimRecord {
        days_since_policy_start: 3,
        claim_amount: dec!(45000),
        police_report_filed: "no".to_string(),
        previous_claims_count: 5,
        filing_delay_days: 40,
        ..Default::default()
    }
}

// ============================================================================
// Heuristic Scorer Tests
// ============================================================================

mod scorer_tests {
    use super::*;

    #[test]
    fn test_clean_claim_scores_zero() {
        let result = score(&clean_claim());

        assert_eq!(result.fraud_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.fraud_indicators.is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn test_all_rules_score_one_hundred() {
        let result = score(&flagged_claim());

        assert_eq!(result.fraud_score, 100);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.fraud_indicators,
            vec![
                "Policy recently started",
                "High claim amount",
                "No police report",
                "Multiple previous claims",
                "Delayed filing",
            ]
        );
    }

    #[test]
    fn test_suspicious_sample_claim() {
        let claim = ClaimRecord {
            days_since_policy_start: 5,
            claim_amount: dec!(25000),
            police_report_filed: "No".to_string(),
            previous_claims_count: 0,
            filing_delay_days: 5,
            ..Default::default()
        };

        let result = score(&claim);

        assert_eq!(result.method, AnalysisMethod::Heuristic);
        assert_eq!(result.fraud_score, 60);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.fraud_indicators,
            vec!["Policy recently started", "High claim amount", "No police report"]
        );
    }

    #[test]
    fn test_boundary_thirty_days_does_not_fire() {
        let claim = ClaimRecord {
            days_since_policy_start: 30,
            ..clean_claim()
        };
        assert_eq!(score(&claim).fraud_score, 0);
    }

    #[test]
    fn test_boundary_twenty_thousand_does_not_fire() {
        let claim = ClaimRecord {
            claim_amount: dec!(20000),
            ..clean_claim()
        };
        assert_eq!(score(&claim).fraud_score, 0);
    }

    #[test]
    fn test_boundary_three_previous_claims_fires() {
        let claim = ClaimRecord {
            previous_claims_count: 3,
            ..clean_claim()
        };
        let result = score(&claim);
        assert_eq!(result.fraud_score, 30);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.fraud_indicators, vec!["Multiple previous claims"]);
    }

    #[test]
    fn test_boundary_fourteen_days_delay_does_not_fire() {
        let claim = ClaimRecord {
            filing_delay_days: 14,
            ..clean_claim()
        };
        assert_eq!(score(&claim).fraud_score, 0);
    }

    #[test]
    fn test_score_tiers_from_rule_combinations() {
        // 25 + 20 + 15 = 60
        let high = ClaimRecord {
            days_since_policy_start: 1,
            claim_amount: dec!(20001),
            police_report_filed: "NO".to_string(),
            ..clean_claim()
        };
        assert_eq!(score(&high).fraud_score, 60);
        assert_eq!(score(&high).risk_level, RiskLevel::High);

        // 25 + 15 + 10 = 50
        let medium = ClaimRecord {
            days_since_policy_start: 1,
            police_report_filed: "no".to_string(),
            filing_delay_days: 20,
            ..clean_claim()
        };
        assert_eq!(score(&medium).fraud_score, 50);
        assert_eq!(score(&medium).risk_level, RiskLevel::Medium);

        // 15 + 10 = 25
        let low = ClaimRecord {
            police_report_filed: "No".to_string(),
            filing_delay_days: 15,
            ..clean_claim()
        };
        assert_eq!(score(&low).fraud_score, 25);
        assert_eq!(score(&low).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_malformed_json_claim_never_fails() {
        let claim = ClaimRecord::from_json(
            r#"{"days_since_policy_start": "n/a", "claim_amount": "lots", "police_report_filed": 0}"#,
        )
        .unwrap();

        assert_eq!(claim.claim_amount, Decimal::ZERO);
        // Unreadable policy age reads as zero days and fires the recent-policy rule
        let result = score(&claim);
        assert_eq!(result.fraud_indicators, vec!["Policy recently started"]);
    }
}

// ============================================================================
// Batch Summary Tests
// ============================================================================

mod summary_tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_batch() {
        let summary = summarize::<ClaimAnalysis>(&[]);

        assert_eq!(summary.total_claims_analyzed, 0);
        assert_eq!(summary.high_risk_count, 0);
        assert_eq!(summary.medium_risk_count, 0);
        assert_eq!(summary.low_risk_count, 0);
        assert_eq!(summary.high_risk_percentage, 0.0);
        assert_eq!(summary.average_fraud_score, 0.0);
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn test_known_scores() {
        let results = vec![
            ClaimAnalysis::remote(None, 10.0, 90.0),
            ClaimAnalysis::remote(None, 40.0, 80.0),
            ClaimAnalysis::remote(None, 70.0, 70.0),
        ];
        let summary = summarize(&results);

        assert_eq!(summary.total_claims_analyzed, 3);
        assert_eq!(summary.high_risk_count, 1);
        assert_eq!(summary.medium_risk_count, 1);
        assert_eq!(summary.low_risk_count, 1);
        assert!(approx_eq(summary.average_fraud_score, 40.0));
        assert!(approx_eq(summary.high_risk_percentage, 100.0 / 3.0));
        assert!(approx_eq(summary.average_confidence, 80.0));
    }

    #[test]
    fn test_heuristic_results_have_zero_confidence() {
        let results = vec![score(&clean_claim()), score(&flagged_claim())];
        let summary = summarize(&results);

        assert_eq!(summary.total_claims_analyzed, 2);
        assert!(approx_eq(summary.average_fraud_score, 50.0));
        assert!(approx_eq(summary.high_risk_percentage, 50.0));
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn test_confidence_averaged_only_where_present() {
        let results = vec![
            ClaimAnalysis::remote(None, 20.0, 60.0),
            ClaimAnalysis::from(score(&clean_claim())),
            ClaimAnalysis::remote(None, 20.0, 90.0),
        ];
        let summary = summarize(&results);

        assert_eq!(summary.total_claims_analyzed, 3);
        assert!(approx_eq(summary.average_confidence, 75.0));
        assert!(approx_eq(summary.average_fraud_score, 40.0 / 3.0));
    }

    #[test]
    fn test_tier_counts_follow_reported_level() {
        // Counts use the reported tier even if the score would map elsewhere
        let mut analysis = ClaimAnalysis::remote(None, 10.0, 50.0);
        analysis.risk_level = RiskLevel::High;

        let summary = summarize(&[analysis]);
        assert_eq!(summary.high_risk_count, 1);
        assert_eq!(summary.low_risk_count, 0);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn claim_strategy() -> impl Strategy<Value = ClaimRecord> {
        (
            0u32..2000,
            0i64..10_000_000,
            prop_oneof![Just("Yes"), Just("No"), Just("no"), Just("")],
            0u32..10,
            0u32..60,
        )
            .prop_map(|(days, cents, report, previous, delay)| ClaimRecord {
                days_since_policy_start: days,
                claim_amount: Decimal::new(cents, 2),
                police_report_filed: report.to_string(),
                previous_claims_count: previous,
                filing_delay_days: delay,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn score_is_sum_of_fired_weights(claim in claim_strategy()) {
            let result = score(&claim);
            let expected: u32 = HEURISTIC_RULES
                .iter()
                .filter(|rule| rule.applies_to(&claim))
                .map(|rule| rule.weight)
                .sum();

            prop_assert_eq!(result.fraud_score, expected);
            prop_assert!(result.fraud_score <= 100);
            prop_assert_eq!(result.risk_level, RiskLevel::from_score(result.fraud_score));
        }

        #[test]
        fn indicators_follow_rule_order(claim in claim_strategy()) {
            let result = score(&claim);
            let expected: Vec<String> = HEURISTIC_RULES
                .iter()
                .filter(|rule| rule.applies_to(&claim))
                .map(|rule| rule.indicator.to_string())
                .collect();

            prop_assert_eq!(result.fraud_indicators, expected);
        }

        #[test]
        fn adding_a_condition_never_lowers_the_score(claim in claim_strategy(), rule in 0usize..5) {
            let before = score(&claim).fraud_score;
            let mut flagged = claim.clone();
            match rule {
                0 => flagged.days_since_policy_start = 0,
                1 => flagged.claim_amount = dec!(50000),
                2 => flagged.police_report_filed = "No".to_string(),
                3 => flagged.previous_claims_count = 3,
                _ => flagged.filing_delay_days = 30,
            }

            prop_assert!(score(&flagged).fraud_score >= before);
        }

        #[test]
        fn summary_counts_partition_the_batch(claims in prop::collection::vec(claim_strategy(), 0..40)) {
            let results: Vec<_> = claims.iter().map(score).collect();
            let summary = summarize(&results);

            prop_assert_eq!(summary.total_claims_analyzed, claims.len());
            prop_assert_eq!(
                summary.high_risk_count + summary.medium_risk_count + summary.low_risk_count,
                claims.len()
            );
            prop_assert!(summary.high_risk_percentage >= 0.0 && summary.high_risk_percentage <= 100.0);
            prop_assert!(summary.average_fraud_score <= 100.0);
        }

        #[test]
        fn summary_ignores_input_order(claims in prop::collection::vec(claim_strategy(), 1..20)) {
            let results: Vec<_> = claims.iter().map(score).collect();
            let mut reversed = results.clone();
            reversed.reverse();

            let forward = summarize(&results);
            let backward = summarize(&reversed);
            prop_assert_eq!(forward.high_risk_count, backward.high_risk_count);
            prop_assert!((forward.average_fraud_score - backward.average_fraud_score).abs() < 1e-9);
        }
    }
}
