//! Built-in demonstration claims
//!
//! Two hand-written auto collision claims, one suspicious and one
//! legitimate, plus a generated batch with varied amounts, histories, and
//! filing delays.

use chrono::NaiveDate;
use domain_fraud::claim::{ClaimDetails, ClaimRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// A claim filed days after the policy started, with no police report
pub fn suspicious_claim() -> ClaimRecord {
    ClaimRecord {
        days_since_policy_start: 5,
        claim_amount: dec!(25000),
        police_report_filed: "No".to_string(),
        previous_claims_count: 0,
        filing_delay_days: 5,
        details: ClaimDetails {
            claim_id: Some("CLM-TEST-001".to_string()),
            claim_type: Some("Auto Collision".to_string()),
            policy_holder: Some("John Doe".to_string()),
            policy_number: Some("POL-123456".to_string()),
            incident_date: date(2024, 1, 15),
            filing_date: date(2024, 1, 20),
            policy_start_date: date(2024, 1, 10),
            years_as_customer: Some(0.1),
            incident_location: Some("Los Angeles, CA".to_string()),
            incident_description: Some("Rear-end collision, total loss".to_string()),
            witnesses: Some("None".to_string()),
            similar_claims_in_area: Some(0),
            repair_provider: Some("Cash Payment Requested".to_string()),
        },
    }
}

/// A small, promptly reported claim from a long-standing customer
pub fn legitimate_claim() -> ClaimRecord {
    ClaimRecord {
        days_since_policy_start: 1461,
        claim_amount: dec!(8500),
        police_report_filed: "Yes".to_string(),
        previous_claims_count: 0,
        filing_delay_days: 1,
        details: ClaimDetails {
            claim_id: Some("CLM-TEST-002".to_string()),
            claim_type: Some("Auto Collision".to_string()),
            policy_holder: Some("Jane Smith".to_string()),
            policy_number: Some("POL-789012".to_string()),
            incident_date: date(2024, 1, 15),
            filing_date: date(2024, 1, 16),
            policy_start_date: date(2020, 1, 1),
            years_as_customer: Some(4.0),
            incident_location: Some("Chicago, IL".to_string()),
            incident_description: Some(
                "Minor rear-end collision at red light, minor damage to bumper".to_string(),
            ),
            witnesses: Some("Yes - two witnesses".to_string()),
            similar_claims_in_area: Some(2),
            repair_provider: Some("Preferred Repair Shop".to_string()),
        },
    }
}

/// The claims shown side by side in the comparison section
pub fn comparison_claims() -> Vec<ClaimRecord> {
    vec![suspicious_claim(), legitimate_claim()]
}

/// Generates `count` batch claims numbered from `CLM-BATCH-001`
pub fn batch_claims(count: usize) -> Vec<ClaimRecord> {
    (0..count).map(batch_claim).collect()
}

fn batch_claim(i: usize) -> ClaimRecord {
    let n = u32::try_from(i).unwrap_or(u32::MAX);
    ClaimRecord {
        days_since_policy_start: 365,
        claim_amount: Decimal::from(10_000u64 + 2_000 * i as u64),
        police_report_filed: if i % 3 == 0 { "Yes" } else { "No" }.to_string(),
        previous_claims_count: n % 3,
        filing_delay_days: n.saturating_mul(2),
        details: ClaimDetails {
            claim_id: Some(format!("CLM-BATCH-{:03}", i + 1)),
            claim_type: Some("Auto Collision".to_string()),
            policy_holder: Some(format!("Customer {}", i + 1)),
            policy_number: Some(format!("POL-{}", 100_000 + i)),
            incident_date: date(2024, 1, 15),
            filing_date: date(2024, 1, 20),
            policy_start_date: date(2023, 1, 1),
            years_as_customer: Some(1.5),
            incident_location: Some("Various".to_string()),
            incident_description: Some(format!("Collision incident {}", i + 1)),
            witnesses: Some(if i % 2 == 0 { "Yes" } else { "No" }.to_string()),
            similar_claims_in_area: Some(n),
            repair_provider: Some("Provider XYZ".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_fraud::risk::RiskLevel;
    use domain_fraud::scorer::score;

    #[test]
    fn test_suspicious_claim_is_high_risk() {
        let result = score(&suspicious_claim());
        assert_eq!(result.fraud_score, 60);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_legitimate_claim_is_clean() {
        let result = score(&legitimate_claim());
        assert_eq!(result.fraud_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_batch_claim_shape() {
        let claims = batch_claims(5);

        assert_eq!(claims.len(), 5);
        assert_eq!(claims[0].reference(), "CLM-BATCH-001");
        assert_eq!(claims[4].reference(), "CLM-BATCH-005");
        assert_eq!(claims[4].claim_amount, dec!(18000));
        assert_eq!(claims[4].previous_claims_count, 1);
        assert_eq!(claims[4].filing_delay_days, 8);
        assert_eq!(claims[3].police_report_filed, "Yes");
        assert_eq!(claims[2].police_report_filed, "No");
    }

    #[test]
    fn test_batch_claim_scores() {
        // Amounts stay under the threshold for five claims; only reports fire
        let scores: Vec<u32> = batch_claims(5).iter().map(|c| score(c).fraud_score).collect();
        assert_eq!(scores, vec![0, 15, 15, 0, 15]);
    }
}
