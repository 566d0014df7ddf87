//! DTOs for `POST /analyze-competition`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CompetitionRecipient, SearchCriteria};

/// Request body: search criteria plus an optional recipient cap.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AnalyzeCompetitionRequest {
    /// Search criteria, all fields optional. Dates default to the last
    /// year when absent.
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    /// Maximum number of recipients to return. Defaults to 20.
    pub limit: Option<usize>,
}

/// Analyzed date window echoed back to the caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DateRange {
    /// Inclusive start date (`YYYY-MM-DD`).
    pub start: String,
    /// Inclusive end date (`YYYY-MM-DD`).
    pub end: String,
}

/// Response envelope for `POST /analyze-competition`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeCompetitionResponse {
    /// Human-readable result summary.
    pub summary: String,
    /// Total number of matching awards upstream.
    pub total_awards_analyzed: u64,
    /// Sum of the top recipients' totals. Covers only the recipients
    /// shown, not the full matching population.
    pub total_market_size: f64,
    /// Date window the analysis covered.
    pub date_range: DateRange,
    /// Top recipients by total amount, descending.
    pub top_recipients: Vec<CompetitionRecipient>,
}
