//! User-supplied search criteria for award queries.
//!
//! Every field is optional. Absent and empty values are equivalent: neither
//! produces a filter clause when the criteria are lowered to the upstream
//! filter object in [`super::filters`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Loosely-typed bag of optional search criteria, deserialized from the
/// camelCase JSON bodies sent by callers.
///
/// Values are passed through without validation; the upstream service is
/// the source of truth for malformed dates, codes, and amounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Free-text keywords.
    pub keywords: Option<Vec<String>>,
    /// Recipient (contractor) name to search for.
    pub recipient_name: Option<String>,
    /// Awarding top-tier agency name.
    pub agency_name: Option<String>,
    /// NAICS industry classification codes.
    pub naics_codes: Option<Vec<String>>,
    /// PSC product/service codes.
    pub psc_codes: Option<Vec<String>>,
    /// Start of the period of performance window (`YYYY-MM-DD`).
    pub activity_start_date: Option<String>,
    /// End of the period of performance window (`YYYY-MM-DD`).
    pub activity_end_date: Option<String>,
    /// Minimum award amount in dollars.
    pub min_amount: Option<f64>,
    /// Maximum award amount in dollars.
    pub max_amount: Option<f64>,
    /// Two-letter place-of-performance state code.
    pub state: Option<String>,
    /// Award type codes (e.g. `"A"`..`"D"` for contracts).
    pub award_type_codes: Option<Vec<String>>,
    /// Set-aside program codes (e.g. small-business set-asides).
    pub set_aside_types: Option<Vec<String>>,
    /// Extent-competed codes.
    pub extent_competed: Option<Vec<String>>,
    /// Contract pricing type codes.
    pub contract_pricing_types: Option<Vec<String>>,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_camel_case_fields() {
        let criteria: SearchCriteria = serde_json::from_value(serde_json::json!({
            "recipientName": "ACME",
            "naicsCodes": ["541512"],
            "minAmount": 10.0,
        }))
        .unwrap();
        assert_eq!(criteria.recipient_name.as_deref(), Some("ACME"));
        assert_eq!(criteria.min_amount, Some(10.0));

        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["recipientName"], "ACME");
        assert_eq!(json["naicsCodes"], serde_json::json!(["541512"]));
    }
}
