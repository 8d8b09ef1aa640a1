//! Report rendering
//!
//! Text rendering mirrors the layout of a side-by-side review sheet:
//! claim details, the heuristic verdict, the analyzer verdict, then
//! batch statistics.

use std::fmt;

use domain_fraud::analysis::ClaimAnalysis;
use domain_fraud::batch::BatchAnalysis;
use domain_fraud::claim::{ClaimRecord, UNIDENTIFIED_CLAIM};
use domain_fraud::comparison::{ClaimComparison, ComparisonReport};
use domain_fraud::scorer::ScoreResult;
use domain_fraud::summary::BatchSummary;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CliError;

const RULE: &str = "--------------------------------------------------------------------------------";
const BANNER: &str = "================================================================================";

/// Limits applied when printing analyses
#[derive(Debug, Clone, Copy)]
pub struct PreviewLimits {
    pub indicators: usize,
    pub reasoning_chars: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            indicators: 5,
            reasoning_chars: 300,
        }
    }
}

/// Formats an amount with thousands separators, e.g. `$25,000` or `$8,500.50`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = if rounded.fract().is_zero() {
        rounded.trunc().to_string()
    } else {
        format!("{:.2}", rounded)
    };

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Shortens text to `max_chars` characters, marking the cut with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Renders the identifying details of a claim
pub fn render_claim_details(claim: &ClaimRecord) -> String {
    ClaimDetailsView(claim).to_string()
}

/// Renders a heuristic result
pub fn render_score(result: &ScoreResult) -> String {
    ScoreView(result).to_string()
}

/// Renders an analyzer result
pub fn render_analysis(analysis: &ClaimAnalysis, limits: PreviewLimits) -> String {
    AnalysisView { analysis, limits }.to_string()
}

/// Renders one heuristic/analyzer comparison
pub fn render_comparison(claim: &ClaimRecord, comparison: &ClaimComparison, limits: PreviewLimits) -> String {
    ComparisonView {
        claim,
        comparison,
        limits,
    }
    .to_string()
}

/// Renders batch statistics
pub fn render_summary(summary: &BatchSummary) -> String {
    SummaryView(summary).to_string()
}

/// Renders a comparison report over its claims
pub fn render_comparison_report(claims: &[ClaimRecord], report: &ComparisonReport, limits: PreviewLimits) -> String {
    ComparisonReportView {
        claims,
        report,
        limits,
    }
    .to_string()
}

/// Renders a batch analysis
pub fn render_batch(batch: &BatchAnalysis) -> String {
    BatchView(batch).to_string()
}

struct ClaimDetailsView<'a>(&'a ClaimRecord);

impl fmt::Display for ClaimDetailsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let claim = self.0;
        let details = &claim.details;

        writeln!(f, "Claim Details:")?;
        writeln!(f, "  - Claim ID: {}", claim.reference())?;
        writeln!(f, "  - Amount: {}", format_amount(claim.claim_amount))?;
        writeln!(f, "  - Days since policy start: {}", claim.days_since_policy_start)?;
        if let Some(years) = details.years_as_customer {
            writeln!(f, "  - Years as customer: {years}")?;
        }
        writeln!(f, "  - Police report: {}", claim.police_report_filed)?;
        if let Some(witnesses) = &details.witnesses {
            writeln!(f, "  - Witnesses: {witnesses}")?;
        }
        if let Some(description) = &details.incident_description {
            writeln!(f, "  - Description: {description}")?;
        }
        Ok(())
    }
}

struct ScoreView<'a>(&'a ScoreResult);

impl fmt::Display for ScoreView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let indicators = if result.fraud_indicators.is_empty() {
            "None".to_string()
        } else {
            result.fraud_indicators.join(", ")
        };

        writeln!(f, "HEURISTIC ANALYSIS:")?;
        writeln!(f, "  - Fraud Score: {}/100", result.fraud_score)?;
        writeln!(f, "  - Risk Level: {}", result.risk_level)?;
        writeln!(f, "  - Indicators: {indicators}")?;
        writeln!(f, "  - Reasoning: {}", result.reasoning)
    }
}

struct AnalysisView<'a> {
    analysis: &'a ClaimAnalysis,
    limits: PreviewLimits,
}

impl fmt::Display for AnalysisView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;

        writeln!(f, "ANALYZER RESULT ({}):", analysis.method.as_str())?;
        writeln!(f, "  - Fraud Score: {:.2}/100", analysis.fraud_score)?;
        writeln!(f, "  - Risk Level: {}", analysis.risk_level)?;
        if let Some(confidence) = analysis.confidence {
            writeln!(f, "  - Confidence: {confidence:.2}%")?;
        }

        if analysis.fraud_indicators.is_empty() {
            writeln!(f, "  - Indicators Found: None")?;
        } else {
            let (shown, remaining) = analysis.indicator_preview(self.limits.indicators);
            writeln!(f, "  - Indicators Found: {}", analysis.fraud_indicators.len())?;
            for (i, indicator) in shown.iter().enumerate() {
                writeln!(f, "    {}. {}", i + 1, indicator)?;
            }
            if remaining > 0 {
                writeln!(f, "    ... and {remaining} more")?;
            }
        }

        if !analysis.reasoning.is_empty() {
            writeln!(
                f,
                "  - Reasoning: {}",
                truncate(&analysis.reasoning, self.limits.reasoning_chars)
            )?;
        }
        for recommendation in &analysis.recommendations {
            writeln!(f, "  - Recommendation: {recommendation}")?;
        }
        Ok(())
    }
}

struct ComparisonView<'a> {
    claim: &'a ClaimRecord,
    comparison: &'a ClaimComparison,
    limits: PreviewLimits,
}

impl fmt::Display for ComparisonView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.comparison;

        writeln!(f, "{}", ClaimDetailsView(self.claim))?;
        writeln!(f, "{}", ScoreView(&comparison.heuristic))?;

        match (&comparison.analysis, &comparison.analyzer_error) {
            (Some(analysis), _) => {
                write!(
                    f,
                    "{}",
                    AnalysisView {
                        analysis,
                        limits: self.limits,
                    }
                )?;
                if let (Some(delta), Some(agree)) = (comparison.score_delta(), comparison.tiers_agree()) {
                    let tier = if agree { "same tier" } else { "different tier" };
                    writeln!(f, "  - Score difference: {delta:+.2} ({tier})")?;
                }
            }
            (None, Some(error)) => {
                writeln!(f, "ANALYZER RESULT:")?;
                writeln!(f, "  - Unavailable: {error}")?;
            }
            (None, None) => {}
        }
        Ok(())
    }
}

struct SummaryView<'a>(&'a BatchSummary);

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(f, "  Total Analyzed: {}", summary.total_claims_analyzed)?;
        writeln!(
            f,
            "  High Risk: {} ({:.1}%)",
            summary.high_risk_count, summary.high_risk_percentage
        )?;
        writeln!(f, "  Medium Risk: {}", summary.medium_risk_count)?;
        writeln!(f, "  Low Risk: {}", summary.low_risk_count)?;
        writeln!(f, "  Average Fraud Score: {:.2}", summary.average_fraud_score)?;
        writeln!(f, "  Average Confidence: {:.2}%", summary.average_confidence)
    }
}

struct ComparisonReportView<'a> {
    claims: &'a [ClaimRecord],
    report: &'a ComparisonReport,
    limits: PreviewLimits,
}

impl fmt::Display for ComparisonReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "{BANNER}")?;
        writeln!(f, "Fraud Detection: Heuristic vs {} Comparison", report.analyzer)?;
        writeln!(f, "{BANNER}")?;

        for (i, (claim, comparison)) in self.claims.iter().zip(&report.comparisons).enumerate() {
            writeln!(f)?;
            writeln!(f, "CASE {}: {}", i + 1, claim.reference())?;
            writeln!(f, "{RULE}")?;
            write!(
                f,
                "{}",
                ComparisonView {
                    claim,
                    comparison,
                    limits: self.limits,
                }
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Heuristic Summary:")?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", SummaryView(&report.heuristic_summary))?;
        writeln!(f, "Analyzer Summary:")?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", SummaryView(&report.analyzer_summary))?;
        writeln!(f, "  Analyzer Failures: {}", report.analyzer_failures)?;
        writeln!(f, "  Tier Agreement: {:.1}%", report.tier_agreement_rate())
    }
}

struct BatchView<'a>(&'a BatchAnalysis);

impl fmt::Display for BatchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let batch = self.0;

        writeln!(f, "{BANNER}")?;
        writeln!(f, "BATCH ANALYSIS ({})", batch.batch_id)?;
        writeln!(f, "{BANNER}")?;
        writeln!(f)?;
        writeln!(f, "Batch Results:")?;
        writeln!(f, "{RULE}")?;
        for result in &batch.results {
            writeln!(
                f,
                "  {}: Score={:.1}, Risk={}",
                result.claim_id.as_deref().unwrap_or(UNIDENTIFIED_CLAIM),
                result.fraud_score,
                result.risk_level
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Summary Statistics:")?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", SummaryView(&batch.summary))
    }
}

/// Renders any serializable report as pretty JSON
pub fn render_json<T: Serialize>(report: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}
