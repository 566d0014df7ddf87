//! Lowering of [`SearchCriteria`] into the USAspending filter object.
//!
//! This is a wire-format contract: each clause must match the shape the
//! upstream `/api/v2/search/*` endpoints expect. The upstream treats an
//! empty array differently from an absent key, so empty criteria fields
//! are omitted entirely rather than serialized as empty clauses.

use serde::Serialize;

use super::criteria::SearchCriteria;

/// Awarding-agency clause entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyFilter {
    /// Agency role, always `"awarding"` for this gateway.
    #[serde(rename = "type")]
    pub agency_type: &'static str,
    /// Agency tier, always `"toptier"`.
    pub tier: &'static str,
    /// Agency name as supplied by the caller.
    pub name: String,
}

/// Period-of-performance clause entry. Only the bounds the caller supplied
/// are serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePeriod {
    /// Inclusive start date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive end date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Award-amount range clause entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountRange {
    /// Minimum amount in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    /// Maximum amount in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
}

/// Place-of-performance location clause entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFilter {
    /// ISO country code, always `"USA"`.
    pub country: &'static str,
    /// Two-letter state code.
    pub state: String,
}

/// Normalized filter object passed to the upstream search endpoints.
///
/// Every field is optional and skipped during serialization when absent,
/// so an empty criteria set serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AwardFilters {
    /// Free-text keyword clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Recipient name search text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_search_text: Option<Vec<String>>,
    /// Awarding agency clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agencies: Option<Vec<AgencyFilter>>,
    /// NAICS code clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naics_codes: Option<Vec<String>>,
    /// PSC code clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psc_codes: Option<Vec<String>>,
    /// Period-of-performance clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<Vec<TimePeriod>>,
    /// Award amount range clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_amounts: Option<Vec<AmountRange>>,
    /// Place-of-performance location clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_performance_locations: Option<Vec<LocationFilter>>,
    /// Award type code clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_type_codes: Option<Vec<String>>,
    /// Set-aside type code clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_aside_type_codes: Option<Vec<String>>,
    /// Extent-competed code clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent_competed_type_codes: Option<Vec<String>>,
    /// Contract pricing type code clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_pricing_type_codes: Option<Vec<String>>,
}

/// Builds the upstream filter object from user-supplied criteria.
///
/// Pure and deterministic. Each present, non-empty criteria field maps to
/// exactly one clause; everything else is omitted. The date pair and the
/// amount pair each collapse into a single range clause.
#[must_use]
pub fn build_award_filters(criteria: &SearchCriteria) -> AwardFilters {
    let start_date = non_empty_str(criteria.activity_start_date.as_deref());
    let end_date = non_empty_str(criteria.activity_end_date.as_deref());
    let time_period = (start_date.is_some() || end_date.is_some()).then(|| {
        vec![TimePeriod {
            start_date,
            end_date,
        }]
    });

    let award_amounts = (criteria.min_amount.is_some() || criteria.max_amount.is_some()).then(|| {
        vec![AmountRange {
            lower_bound: criteria.min_amount,
            upper_bound: criteria.max_amount,
        }]
    });

    AwardFilters {
        keywords: non_empty_vec(criteria.keywords.as_deref()),
        recipient_search_text: non_empty_str(criteria.recipient_name.as_deref())
            .map(|name| vec![name]),
        agencies: non_empty_str(criteria.agency_name.as_deref()).map(|name| {
            vec![AgencyFilter {
                agency_type: "awarding",
                tier: "toptier",
                name,
            }]
        }),
        naics_codes: non_empty_vec(criteria.naics_codes.as_deref()),
        psc_codes: non_empty_vec(criteria.psc_codes.as_deref()),
        time_period,
        award_amounts,
        place_of_performance_locations: non_empty_str(criteria.state.as_deref()).map(|state| {
            vec![LocationFilter {
                country: "USA",
                state,
            }]
        }),
        award_type_codes: non_empty_vec(criteria.award_type_codes.as_deref()),
        set_aside_type_codes: non_empty_vec(criteria.set_aside_types.as_deref()),
        extent_competed_type_codes: non_empty_vec(criteria.extent_competed.as_deref()),
        contract_pricing_type_codes: non_empty_vec(criteria.contract_pricing_types.as_deref()),
    }
}

/// Returns the owned string when present and non-empty.
fn non_empty_str(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.is_empty())
        .map(std::string::ToString::to_string)
}

/// Returns an owned copy of the slice when present and non-empty.
fn non_empty_vec(value: Option<&[String]>) -> Option<Vec<String>> {
    value.filter(|v| !v.is_empty()).map(<[String]>::to_vec)
}
