//! Fraud Scoring Demo - Command-line Binary
//!
//! Scores sample claims (or claims from a JSON file) with the heuristic
//! rules, compares them against a claim analyzer, and prints a report.
//!
//! # Usage
//!
//! ```bash
//! # Run with built-in sample claims
//! cargo run --bin fraud-demo
//!
//! # Score claims from a file and print JSON
//! FRAUD_CLAIMS_FILE=claims.json FRAUD_OUTPUT_FORMAT=json cargo run --bin fraud-demo
//! ```
//!
//! # Environment Variables
//!
//! * `FRAUD_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `FRAUD_LOG_FORMAT` - Log format: text or json (default: text)
//! * `FRAUD_CLAIMS_FILE` - JSON file with an array of claims (default: built-in samples)
//! * `FRAUD_OUTPUT_FORMAT` - Report format: text or json (default: text)
//! * `FRAUD_INDICATOR_PREVIEW` - Indicators printed per analysis (default: 5)
//! * `FRAUD_REASONING_PREVIEW` - Reasoning characters printed per analysis (default: 300)
//! * `FRAUD_BATCH_SIZE` - Generated claims in the sample batch (default: 5)

use domain_fraud::ports::HeuristicAnalyzer;
use interface_cli::app;
use interface_cli::config::{DemoConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// # Errors
///
/// Returns an error if configuration is invalid, the claims file cannot be
/// read, or the analyzer fails during the batch run.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = DemoConfig::from_env()?;

    init_tracing(&config);

    tracing::info!(
        claims_file = ?config.claims_file,
        output_format = ?config.output_format,
        "Starting fraud scoring demo"
    );

    // A hosted-model adapter implementing ClaimAnalyzer can be swapped in here
    let analyzer = HeuristicAnalyzer::new();

    let output = app::run(&config, &analyzer).await.inspect_err(|error| {
        tracing::error!(%error, configuration = error.is_configuration(), "Fraud scoring demo failed");
    })?;
    println!("{output}");

    tracing::info!("Fraud scoring demo complete");
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr so stdout carries only the report
fn init_tracing(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
