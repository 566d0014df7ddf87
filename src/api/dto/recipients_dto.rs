//! DTOs for `GET`/`POST /search-recipients`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{SearchCriteria, StatisticsDigest, TransformedAward};

/// Query string for `GET /search-recipients`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipientQuery {
    /// Recipient name to search for. Required; its absence is a 400.
    pub name: Option<String>,
    /// Maximum number of awards to return. Defaults to 10, capped at 50.
    pub limit: Option<u32>,
}

/// Request body for `POST /search-recipients`. The recipient name may
/// arrive as either `name` or `recipientName`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRecipientsRequest {
    /// Recipient name to search for.
    pub name: Option<String>,
    /// Additional criteria (`recipientName` alias, NAICS codes, agency,
    /// date window).
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    /// Maximum number of awards to return. Defaults to 10, capped at 50.
    pub limit: Option<u32>,
}

/// Response envelope for both recipient search methods.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchRecipientsResponse {
    /// The name that was searched.
    pub search_term: String,
    /// Total number of matching awards upstream.
    pub total_awards_found: u64,
    /// Number of awards included in this response.
    pub showing: usize,
    /// Descriptive statistics over the returned awards.
    pub statistics: StatisticsDigest,
    /// The recipient's most valuable recent awards.
    pub recent_awards: Vec<TransformedAward>,
}
