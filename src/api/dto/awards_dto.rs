//! DTOs for `POST /search-awards`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{SearchCriteria, TransformedAward};

/// Request body: full search criteria plus pagination and sorting.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SearchAwardsRequest {
    /// Search criteria, all fields optional.
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    /// Page size. Defaults to 10.
    pub limit: Option<u32>,
    /// 1-indexed page. Defaults to 1.
    pub page: Option<u32>,
    /// Upstream sort field. Defaults to `"Award Amount"`.
    pub sort: Option<String>,
    /// `"asc"` or `"desc"`. Defaults to `"desc"`.
    pub order: Option<String>,
}

/// Response envelope for `POST /search-awards`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchAwardsResponse {
    /// Human-readable result summary.
    pub summary: String,
    /// Total number of matching awards upstream.
    pub total: u64,
    /// Current page number.
    pub page: u32,
    /// Whether another page exists.
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    /// Simplified award records for this page.
    pub awards: Vec<TransformedAward>,
}
