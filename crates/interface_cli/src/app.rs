//! End-to-end demo run

use domain_fraud::batch::{run_batch_analysis, BatchAnalysis};
use domain_fraud::claim::ClaimRecord;
use domain_fraud::comparison::{compare_batch, ComparisonReport};
use domain_fraud::ports::ClaimAnalyzer;
use serde::Serialize;
use tracing::info;

use crate::config::{DemoConfig, OutputFormat};
use crate::error::CliError;
use crate::loader::load_claims;
use crate::report::{self, PreviewLimits};
use crate::samples;

/// Everything produced by one demo run
#[derive(Debug, Serialize)]
pub struct DemoReport {
    #[serde(skip)]
    pub comparison_claims: Vec<ClaimRecord>,
    pub comparison: ComparisonReport,
    pub batch: BatchAnalysis,
}

/// Picks the claims for the comparison and batch sections
///
/// A configured claims file feeds both sections; otherwise the built-in
/// samples are used.
pub fn select_claims(config: &DemoConfig) -> Result<(Vec<ClaimRecord>, Vec<ClaimRecord>), CliError> {
    match &config.claims_file {
        Some(path) => {
            let claims = load_claims(path)?;
            Ok((claims.clone(), claims))
        }
        None => Ok((samples::comparison_claims(), samples::batch_claims(config.batch_size))),
    }
}

/// Runs the comparison and the batch analysis
pub async fn execute<A>(config: &DemoConfig, analyzer: &A) -> Result<DemoReport, CliError>
where
    A: ClaimAnalyzer + ?Sized,
{
    let (comparison_claims, batch_claims) = select_claims(config)?;
    info!(
        analyzer = analyzer.analyzer_name(),
        comparison_claims = comparison_claims.len(),
        batch_claims = batch_claims.len(),
        "Running fraud scoring demo"
    );

    let comparison = compare_batch(analyzer, &comparison_claims).await;
    let batch = run_batch_analysis(analyzer, &batch_claims).await?;

    Ok(DemoReport {
        comparison_claims,
        comparison,
        batch,
    })
}

/// Renders a demo report in the configured format
pub fn render(config: &DemoConfig, demo: &DemoReport) -> Result<String, CliError> {
    match config.output_format {
        OutputFormat::Json => report::render_json(demo),
        OutputFormat::Text => {
            let limits = PreviewLimits {
                indicators: config.indicator_preview,
                reasoning_chars: config.reasoning_preview,
            };
            let mut out =
                report::render_comparison_report(&demo.comparison_claims, &demo.comparison, limits);
            out.push('\n');
            out.push_str(&report::render_batch(&demo.batch));
            Ok(out)
        }
    }
}

/// Runs the demo and returns the rendered output
pub async fn run<A>(config: &DemoConfig, analyzer: &A) -> Result<String, CliError>
where
    A: ClaimAnalyzer + ?Sized,
{
    let demo = execute(config, analyzer).await?;
    render(config, &demo)
}
