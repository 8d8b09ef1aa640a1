//! Claim records as submitted for fraud scoring
//!
//! Claim payloads arrive from spreadsheets, portals, and hand-written JSON,
//! so every field is optional and deserialization is lenient: a missing or
//! malformed scoring field reads as zero (or the empty string) and the
//! scoring rules simply do not fire for it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FraudError;

/// Reference used in logs and reports when a claim carries no identifier
pub const UNIDENTIFIED_CLAIM: &str = "UNIDENTIFIED";

/// A claim as seen by the fraud scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Days between policy start and the incident
    #[serde(default, deserialize_with = "lenient::count")]
    pub days_since_policy_start: u32,
    /// Claimed amount in currency units
    #[serde(default, deserialize_with = "lenient::amount")]
    pub claim_amount: Decimal,
    /// Whether a police report was filed ("Yes" / "No")
    #[serde(default, deserialize_with = "lenient::text")]
    pub police_report_filed: String,
    /// Number of claims previously filed by the policyholder
    #[serde(default, deserialize_with = "lenient::count")]
    pub previous_claims_count: u32,
    /// Days between the incident and the filing
    #[serde(default, deserialize_with = "lenient::count")]
    pub filing_delay_days: u32,
    /// Descriptive fields carried for reporting and remote analyzers
    #[serde(flatten)]
    pub details: ClaimDetails,
}

/// Descriptive claim fields that do not take part in heuristic scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimDetails {
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub policy_holder: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub incident_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub policy_start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::optional_number", skip_serializing_if = "Option::is_none")]
    pub years_as_customer: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub incident_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub incident_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub witnesses: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_count", skip_serializing_if = "Option::is_none")]
    pub similar_claims_in_area: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub repair_provider: Option<String>,
}

impl ClaimRecord {
    /// Returns the claim identifier, or a placeholder when none was supplied
    pub fn reference(&self) -> &str {
        self.details.claim_id.as_deref().unwrap_or(UNIDENTIFIED_CLAIM)
    }

    /// Returns true if the police report field reads "no" in any case
    pub fn police_report_missing(&self) -> bool {
        self.police_report_filed.eq_ignore_ascii_case("no")
    }

    /// Parses a single claim object
    pub fn from_json(json: &str) -> Result<Self, FraudError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses either a JSON array of claim objects or a single claim object
    pub fn many_from_json(json: &str) -> Result<Vec<Self>, FraudError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(FraudError::from))
                .collect(),
            other => Ok(vec![serde_json::from_value(other)?]),
        }
    }
}

/// Field readers that map absent or malformed values to defaults
mod lenient {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Number, Value};

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(count_from(&Value::deserialize(deserializer)?).unwrap_or(0))
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        Ok(count_from(&Value::deserialize(deserializer)?))
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Number(n) => decimal_from(&n.to_string()),
            Value::String(s) => decimal_from(s.trim()),
            _ => None,
        };
        Ok(parsed.filter(|d| !d.is_sign_negative()).unwrap_or(Decimal::ZERO))
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Ok(None),
        }
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let parsed = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.filter(|f| f.is_finite()))
    }

    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()),
            _ => Ok(None),
        }
    }

    fn count_from(value: &Value) -> Option<u32> {
        match value {
            Value::Number(n) => count_from_number(n),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .map(saturate)
                    .or_else(|| s.parse::<f64>().ok().and_then(count_from_float))
            }
            _ => None,
        }
    }

    fn count_from_number(n: &Number) -> Option<u32> {
        n.as_u64()
            .map(saturate)
            .or_else(|| n.as_f64().and_then(count_from_float))
    }

    // Counts are whole numbers; a fractional count is malformed
    fn count_from_float(f: f64) -> Option<u32> {
        (f.is_finite() && f >= 0.0 && f.fract() == 0.0).then(|| f.min(u32::MAX as f64) as u32)
    }

    fn saturate(v: u64) -> u32 {
        u32::try_from(v).unwrap_or(u32::MAX)
    }

    fn decimal_from(s: &str) -> Option<Decimal> {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .ok()
            .or_else(|| decimal_out_of_range(s))
    }

    // Finite numbers beyond Decimal's range saturate; sub-precision magnitudes read as zero
    fn decimal_out_of_range(s: &str) -> Option<Decimal> {
        let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
        if f.abs() < 1.0 {
            Some(Decimal::ZERO)
        } else if f.is_sign_negative() {
            Some(Decimal::MIN)
        } else {
            Some(Decimal::MAX)
        }
    }
}
