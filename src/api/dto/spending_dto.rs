//! DTOs for `POST /spending-over-time`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{SearchCriteria, TrendDirection};
use crate::upstream::types::TrendPoint;

/// Request body: search criteria plus an optional grouping key.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SpendingOverTimeRequest {
    /// Search criteria, all fields optional.
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    /// Time bucket: `"fiscal_year"`, `"quarter"`, or `"month"`.
    /// Defaults to `"fiscal_year"`.
    pub group: Option<String>,
}

/// Response envelope for `POST /spending-over-time`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SpendingTrendResponse {
    /// Human-readable result summary.
    pub summary: String,
    /// Grouping key that was applied.
    pub group_by: String,
    /// Trend classification between the first and last buckets.
    pub trend_direction: TrendDirection,
    /// Grouped buckets in upstream order, values untouched.
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<TrendPoint>,
}
