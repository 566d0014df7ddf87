//! Field-selection lists and record transforms.
//!
//! The upstream search endpoint returns records keyed by the human-readable
//! field names requested in the `fields` list (plus a few snake_case extras).
//! Transforms here map those records onto the stable shapes this gateway
//! promises its callers, tolerating missing keys and string-typed numbers.

use serde::Serialize;
use utoipa::ToSchema;

use super::aggregate::RecipientRollup;
use crate::upstream::types::AwardRecord;

/// Fields requested for award search and recipient lookups.
pub const AWARD_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Recipient UEI",
    "Award Amount",
    "Start Date",
    "End Date",
    "awarding_toptier_agency_name",
    "NAICS Code",
    "naics_description",
    "Description",
];

/// Reduced field set for competition analysis, which only needs the
/// recipient identity and the amount.
pub const COMPETITION_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Recipient UEI",
    "Award Amount",
];

/// Simplified award record with stable, caller-facing field names.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransformedAward {
    /// Human-readable award identifier (PIID/FAIN).
    pub award_id: String,
    /// Recipient legal business name.
    pub recipient_name: String,
    /// Recipient unique entity identifier.
    pub recipient_uei: String,
    /// Award amount in dollars.
    pub amount: f64,
    /// Period-of-performance start date.
    pub start_date: String,
    /// Period-of-performance end date.
    pub end_date: String,
    /// Awarding top-tier agency name.
    pub awarding_agency: String,
    /// NAICS industry code.
    pub naics_code: String,
    /// NAICS code description.
    pub naics_description: String,
    /// Award description text.
    pub description: String,
}

/// One recipient row in the competition-analysis response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompetitionRecipient {
    /// Recipient legal business name.
    pub name: String,
    /// Recipient unique entity identifier.
    pub uei: String,
    /// Total dollars across the recipient's awards in this result set.
    pub total_amount: f64,
    /// Number of awards in this result set.
    pub award_count: usize,
    /// Share of the analyzed market, `total_amount / total_market_size`
    /// (0 when the market size is 0).
    pub market_share: f64,
    /// Identifiers of the awards rolled into this row.
    pub award_ids: Vec<String>,
}

/// Maps a raw upstream record onto [`TransformedAward`]. Missing keys
/// default to empty string / 0.
#[must_use]
pub fn transform_award_result(record: &AwardRecord) -> TransformedAward {
    TransformedAward {
        award_id: record_str(record, "Award ID"),
        recipient_name: record_str(record, "Recipient Name"),
        recipient_uei: record_str(record, "Recipient UEI"),
        amount: record_amount(record, "Award Amount"),
        start_date: record_str(record, "Start Date"),
        end_date: record_str(record, "End Date"),
        awarding_agency: record_str(record, "awarding_toptier_agency_name"),
        naics_code: record_str(record, "NAICS Code"),
        naics_description: record_str(record, "naics_description"),
        description: record_str(record, "Description"),
    }
}

/// Maps a recipient rollup onto the competition-analysis row, adding the
/// market-share ratio against the analyzed market size.
#[must_use]
pub fn transform_competition_recipient(
    rollup: &RecipientRollup,
    total_market_size: f64,
) -> CompetitionRecipient {
    let market_share = if total_market_size == 0.0 {
        0.0
    } else {
        rollup.total_amount / total_market_size
    };
    CompetitionRecipient {
        name: rollup.name.clone(),
        uei: rollup.uei.clone(),
        total_amount: rollup.total_amount,
        award_count: rollup.award_count,
        market_share,
        award_ids: rollup.award_ids.clone(),
    }
}

/// Extracts a string field, falling back to `""`. Non-string scalars are
/// rendered via their JSON representation.
#[must_use]
pub fn record_str(record: &AwardRecord, key: &str) -> String {
    match record.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Extracts a numeric field, coercing numeric strings and falling back
/// to 0 for anything unparseable. A malformed record must never fail the
/// batch it arrived in.
#[must_use]
pub fn record_amount(record: &AwardRecord, key: &str) -> f64 {
    match record.get(key) {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> AwardRecord {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn transform_tolerates_missing_keys() {
        let award = transform_award_result(&record(json!({})));
        assert_eq!(award.award_id, "");
        assert_eq!(award.recipient_name, "");
        assert_eq!(award.amount, 0.0);
    }

    #[test]
    fn transform_coerces_string_amounts() {
        let award = transform_award_result(&record(json!({
            "Award ID": "W912-24-C-0001",
            "Recipient Name": "ACME CORP",
            "Award Amount": "1500000.50",
        })));
        assert_eq!(award.amount, 1_500_000.50);
        assert_eq!(award.recipient_name, "ACME CORP");
    }

    #[test]
    fn malformed_amount_defaults_to_zero() {
        let award = transform_award_result(&record(json!({
            "Award Amount": "not a number",
        })));
        assert_eq!(award.amount, 0.0);
    }

    #[test]
    fn market_share_guards_zero_market() {
        let rollup = RecipientRollup {
            name: "ACME".to_string(),
            uei: "UEI123".to_string(),
            total_amount: 0.0,
            award_count: 1,
            award_ids: vec![],
        };
        let out = transform_competition_recipient(&rollup, 0.0);
        assert_eq!(out.market_share, 0.0);
    }

    #[test]
    fn market_share_is_fraction_of_market() {
        let rollup = RecipientRollup {
            name: "ACME".to_string(),
            uei: "UEI123".to_string(),
            total_amount: 250.0,
            award_count: 2,
            award_ids: vec!["A-1".to_string(), "A-2".to_string()],
        };
        let out = transform_competition_recipient(&rollup, 1_000.0);
        assert_eq!(out.market_share, 0.25);
        assert_eq!(out.award_count, 2);
    }
}
