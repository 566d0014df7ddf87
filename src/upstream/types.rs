//! Request and response types for the USAspending search endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::filters::AwardFilters;

/// Raw award record as returned by the upstream, keyed by the requested
/// field names. Values are left untyped because the upstream mixes numbers,
/// numeric strings, and nulls.
pub type AwardRecord = serde_json::Map<String, serde_json::Value>;

/// Sort order accepted by the award search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Request body for `POST /api/v2/search/spending_by_award/`.
#[derive(Debug, Clone, Serialize)]
pub struct AwardSearchParams {
    /// Filter object built from the caller's criteria.
    pub filters: AwardFilters,
    /// Field names to include in each result record.
    pub fields: Vec<String>,
    /// Page size.
    pub limit: u32,
    /// 1-indexed page number.
    pub page: u32,
    /// Field to sort by (upstream field name, e.g. `"Award Amount"`).
    pub sort: String,
    /// Sort order.
    pub order: SortOrder,
}

/// Pagination metadata echoed by the award search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMetadata {
    /// Total number of matching awards.
    #[serde(default)]
    pub total: u64,
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Whether another page exists.
    #[serde(default, rename = "hasNext")]
    pub has_next: bool,
}

/// Response body of the award search endpoint. Missing keys default to
/// empty so a sparse upstream payload never fails deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwardSearchResponse {
    /// One record per award, keyed by the requested field names.
    #[serde(default)]
    pub results: Vec<AwardRecord>,
    /// Pagination metadata.
    #[serde(default)]
    pub page_metadata: PageMetadata,
}

/// Request body for `POST /api/v2/search/spending_over_time/`.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingOverTimeParams {
    /// Filter object built from the caller's criteria.
    pub filters: AwardFilters,
    /// Time bucket, e.g. `"fiscal_year"`, `"quarter"`, `"month"`.
    pub group: String,
}

/// One grouped time bucket from the spending-over-time endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Bucket key as returned by the upstream (an object such as
    /// `{"fiscal_year": "2023"}`), passed through untouched. A bucket
    /// without one decodes as `null` rather than failing the response.
    #[serde(default)]
    pub time_period: serde_json::Value,
    /// Total obligated dollars in the bucket.
    #[serde(default)]
    pub aggregated_amount: f64,
}

/// Response body of the spending-over-time endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpendingOverTimeResponse {
    /// Grouped buckets in upstream order.
    #[serde(default)]
    pub results: Vec<TrendPoint>,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn trend_point_tolerates_missing_time_period() {
        let resp: SpendingOverTimeResponse = serde_json::from_value(serde_json::json!({
            "results": [
                {"aggregated_amount": 10.0},
                {"time_period": {"fiscal_year": "2023"}, "aggregated_amount": 20.0},
            ]
        }))
        .unwrap();
        assert_eq!(resp.results.len(), 2);
        assert!(resp.results.first().unwrap().time_period.is_null());
        assert_eq!(resp.results.first().unwrap().aggregated_amount, 10.0);
    }

    #[test]
    fn sparse_award_search_response_decodes() {
        let resp: AwardSearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.results.is_empty());
        assert_eq!(resp.page_metadata.total, 0);
        assert!(!resp.page_metadata.has_next);
    }
}
