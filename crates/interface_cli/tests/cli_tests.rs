//! Integration tests for the fraud scoring demo harness
//!
//! These tests run the demo end to end against the heuristic analyzer and
//! scripted stand-ins for a remote analyzer.

use domain_fraud::ports::HeuristicAnalyzer;
use domain_fraud::risk::RiskLevel;
use interface_cli::app;
use interface_cli::config::{DemoConfig, OutputFormat};
use test_utils::{
    assert_approx_eq, assert_indicators_in_rule_order, assert_summary_consistent, AnalysisFixtures,
    ScriptedAnalyzer,
};

mod sample_run {
    use super::*;

    #[tokio::test]
    async fn test_sample_comparison_with_heuristic_analyzer() {
        let config = DemoConfig::default();
        let report = app::execute(&config, &HeuristicAnalyzer::new()).await.unwrap();

        assert_eq!(report.comparison_claims.len(), 2);
        assert_eq!(report.comparison.comparisons.len(), 2);
        assert_eq!(report.comparison.analyzer_failures, 0);

        let suspicious = &report.comparison.comparisons[0];
        assert_eq!(suspicious.claim_id.as_deref(), Some("CLM-TEST-001"));
        assert_eq!(suspicious.heuristic.fraud_score, 60);
        assert_eq!(suspicious.heuristic.risk_level, RiskLevel::High);
        assert_indicators_in_rule_order(&suspicious.heuristic.fraud_indicators);

        let legitimate = &report.comparison.comparisons[1];
        assert_eq!(legitimate.heuristic.fraud_score, 0);
        assert!(legitimate.heuristic.fraud_indicators.is_empty());
    }

    #[tokio::test]
    async fn test_sample_batch_summary() {
        let config = DemoConfig::default();
        let report = app::execute(&config, &HeuristicAnalyzer::new()).await.unwrap();
        let summary = &report.batch.summary;

        assert_summary_consistent(summary);
        assert_eq!(summary.total_claims_analyzed, 5);
        assert_eq!(summary.high_risk_count, 0);
        assert_eq!(summary.low_risk_count, 5);
        assert_approx_eq(summary.average_fraud_score, 9.0, 1e-9);
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[tokio::test]
    async fn test_batch_size_follows_config() {
        let config = DemoConfig {
            batch_size: 12,
            ..DemoConfig::default()
        };
        let report = app::execute(&config, &HeuristicAnalyzer::new()).await.unwrap();

        assert_eq!(report.batch.results.len(), 12);
        assert_eq!(
            report.batch.results[11].claim_id.as_deref(),
            Some("CLM-BATCH-012")
        );
    }

    #[tokio::test]
    async fn test_text_output() {
        let output = app::run(&DemoConfig::default(), &HeuristicAnalyzer::new())
            .await
            .unwrap();

        assert!(output.contains("Claim ID: CLM-TEST-001"));
        assert!(output.contains("Amount: $25,000"));
        assert!(output.contains("Fraud Score: 60/100"));
        assert!(output.contains(
            "Indicators: Policy recently started, High claim amount, No police report"
        ));
        assert!(output.contains("CLM-BATCH-005: Score=15.0, Risk=LOW"));
        assert!(output.contains("Total Analyzed: 5"));
        assert!(output.contains("Tier Agreement: 100.0%"));
    }

    #[tokio::test]
    async fn test_json_output() {
        let config = DemoConfig {
            output_format: OutputFormat::Json,
            ..DemoConfig::default()
        };
        let output = app::run(&config, &HeuristicAnalyzer::new()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["comparison"]["analyzer"], "heuristic");
        assert_eq!(
            value["comparison"]["comparisons"][0]["heuristic"]["risk_level"],
            "HIGH"
        );
        assert_eq!(
            value["comparison"]["comparisons"][0]["heuristic"]["method"],
            "heuristic"
        );
        assert_eq!(value["batch"]["summary"]["total_claims_analyzed"], 5);
        assert!(value.get("comparison_claims").is_none());
    }
}

mod scripted_analyzer_run {
    use super::*;

    #[tokio::test]
    async fn test_analyzer_failure_is_reported_not_fatal() {
        let analyzer = ScriptedAnalyzer::new()
            .answering("CLM-TEST-001", AnalysisFixtures::high_risk("CLM-TEST-001"))
            .unavailable_for("CLM-TEST-002");

        let report = app::execute(&DemoConfig::default(), &analyzer).await.unwrap();

        assert_eq!(report.comparison.analyzer_failures, 1);
        assert_eq!(report.comparison.analyzer_summary.total_claims_analyzed, 1);
        assert_eq!(report.comparison.analyzer_summary.high_risk_count, 1);
        assert_approx_eq(report.comparison.analyzer_summary.average_confidence, 91.0, 1e-9);

        let output = app::render(&DemoConfig::default(), &report).unwrap();
        assert!(output.contains("Unavailable: Service unavailable: scripted-model"));
        assert!(output.contains("Indicators Found: 6"));
        assert!(output.contains("... and 1 more"));
        assert!(output.contains("Recommendation: Refer to special investigations unit"));
    }

    #[tokio::test]
    async fn test_batch_failure_aborts_run() {
        let analyzer = ScriptedAnalyzer::new().rate_limited_for("CLM-BATCH-003", 60);

        let result = app::execute(&DemoConfig::default(), &analyzer).await;
        let error = result.unwrap_err();

        assert!(!error.is_configuration());
        assert!(error.to_string().contains("Rate limited"));
    }

    #[tokio::test]
    async fn test_confidence_averaged_across_batch() {
        let analyzer = ScriptedAnalyzer::new().with_fallback_confidence(80.0);

        let report = app::execute(&DemoConfig::default(), &analyzer).await.unwrap();

        assert_approx_eq(report.batch.summary.average_confidence, 80.0, 1e-9);
        assert_eq!(analyzer.calls(), 2 + 5);
    }

    #[tokio::test]
    async fn test_low_risk_agreement() {
        let analyzer = ScriptedAnalyzer::new()
            .answering("CLM-TEST-001", AnalysisFixtures::low_risk("CLM-TEST-001"))
            .answering("CLM-TEST-002", AnalysisFixtures::low_risk("CLM-TEST-002"));

        let report = app::execute(&DemoConfig::default(), &analyzer).await.unwrap();

        // Heuristic flags the first claim HIGH, the analyzer says LOW for both
        assert_eq!(report.comparison.tier_agreement_rate(), 50.0);
        let delta = report.comparison.comparisons[0].score_delta().unwrap();
        assert_approx_eq(delta, 8.0 - 60.0, 1e-9);
    }
}

mod claims_file_run {
    use super::*;
    use std::path::PathBuf;

    fn write_claims(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_claims_file_feeds_both_sections() {
        let path = write_claims(
            "cli-claims.json",
            r#"[
                {"claim_id": "CLM-F-1", "days_since_policy_start": 10, "claim_amount": 30000,
                 "police_report_filed": "no", "previous_claims_count": 4, "filing_delay_days": 30},
                {"claim_id": "CLM-F-2", "days_since_policy_start": 900, "claim_amount": "1200.50",
                 "police_report_filed": "Yes"}
            ]"#,
        );
        let config = DemoConfig {
            claims_file: Some(path.clone()),
            ..DemoConfig::default()
        };

        let report = app::execute(&config, &HeuristicAnalyzer::new()).await.unwrap();

        assert_eq!(report.comparison.comparisons.len(), 2);
        assert_eq!(report.batch.results.len(), 2);
        assert_eq!(report.comparison.comparisons[0].heuristic.fraud_score, 100);
        assert_eq!(report.batch.summary.high_risk_count, 1);
        assert_approx_eq(report.batch.summary.high_risk_percentage, 50.0, 1e-9);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_claims_file() {
        let config = DemoConfig {
            claims_file: Some(PathBuf::from("/nonexistent/fraud-claims.json")),
            ..DemoConfig::default()
        };

        let error = app::execute(&config, &HeuristicAnalyzer::new())
            .await
            .unwrap_err();
        assert!(error.to_string().contains("Not found"));
    }

    #[tokio::test]
    async fn test_failures_convert_to_boxed_errors() {
        let config = DemoConfig {
            claims_file: Some(PathBuf::from("/nonexistent/fraud-claims.json")),
            ..DemoConfig::default()
        };
        let run_error: Box<dyn std::error::Error> = app::run(&config, &HeuristicAnalyzer::new())
            .await
            .unwrap_err()
            .into();
        assert!(run_error.to_string().contains("fraud-claims.json"));

        let config_error: Box<dyn std::error::Error> =
            DemoConfig::from_vars([("FRAUD_BATCH_SIZE", "0")]).unwrap_err().into();
        assert!(config_error.to_string().starts_with("Invalid configuration"));
    }
}
