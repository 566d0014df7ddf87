//! Recipient search handlers: awards plus a statistics digest for one
//! contractor, reachable by query string or JSON body.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use super::{DEFAULT_SORT_FIELD, default_date_window, or_default_date};
use crate::api::dto::{RecipientQuery, SearchRecipientsRequest, SearchRecipientsResponse};
use crate::app_state::AppState;
use crate::domain::{
    AWARD_FIELDS, SearchCriteria, build_award_filters, statistics_digest, transform_award_result,
};
use crate::error::GatewayError;
use crate::upstream::types::{AwardSearchParams, SortOrder};

/// Hard cap on awards returned per recipient lookup.
const MAX_RECIPIENT_AWARDS: u32 = 50;

/// `GET /search-recipients?name=&limit=` — Recipient lookup via query
/// string.
///
/// # Errors
///
/// Returns [`GatewayError::MissingParameter`] when `name` is absent and
/// [`GatewayError`] when the upstream call fails.
pub async fn search_recipients_get(
    State(state): State<AppState>,
    Query(query): Query<RecipientQuery>,
) -> Result<Json<SearchRecipientsResponse>, GatewayError> {
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            GatewayError::MissingParameter("name query parameter is required".to_string())
        })?;

    let criteria = SearchCriteria {
        recipient_name: Some(name.clone()),
        ..SearchCriteria::default()
    };
    let response = lookup_recipient(&state, name, criteria, query.limit.unwrap_or(10)).await?;
    Ok(Json(response))
}

/// `POST /search-recipients` — Recipient lookup via JSON body. The name
/// may arrive as `name` or `recipientName`; extra criteria narrow the
/// award set.
///
/// # Errors
///
/// Returns [`GatewayError::MissingParameter`] when no name is supplied
/// and [`GatewayError`] when the upstream call fails.
pub async fn search_recipients_post(
    State(state): State<AppState>,
    Json(req): Json<SearchRecipientsRequest>,
) -> Result<Json<SearchRecipientsResponse>, GatewayError> {
    // An empty `name` counts as absent, so the `recipientName` alias can
    // still supply the search term.
    let name = req
        .name
        .filter(|n| !n.is_empty())
        .or_else(|| req.criteria.recipient_name.clone().filter(|n| !n.is_empty()))
        .ok_or_else(|| GatewayError::MissingParameter("name field is required".to_string()))?;

    let criteria = SearchCriteria {
        recipient_name: Some(name.clone()),
        naics_codes: req.criteria.naics_codes,
        agency_name: req.criteria.agency_name,
        activity_start_date: req.criteria.activity_start_date,
        activity_end_date: req.criteria.activity_end_date,
        ..SearchCriteria::default()
    };
    let response = lookup_recipient(&state, name, criteria, req.limit.unwrap_or(10)).await?;
    Ok(Json(response))
}

/// Shared lookup: defaults the date window to the last three years, caps
/// the page size, and assembles the statistics digest.
async fn lookup_recipient(
    state: &AppState,
    name: String,
    mut criteria: SearchCriteria,
    limit: u32,
) -> Result<SearchRecipientsResponse, GatewayError> {
    let (default_start, default_end) = default_date_window(3);
    or_default_date(&mut criteria.activity_start_date, default_start);
    or_default_date(&mut criteria.activity_end_date, default_end);

    let params = AwardSearchParams {
        filters: build_award_filters(&criteria),
        fields: AWARD_FIELDS.iter().map(ToString::to_string).collect(),
        limit: limit.min(MAX_RECIPIENT_AWARDS),
        page: 1,
        sort: DEFAULT_SORT_FIELD.to_string(),
        order: SortOrder::Desc,
    };

    let result = state.spending_client.search_awards(&params).await?;
    let awards = &result.results;

    Ok(SearchRecipientsResponse {
        search_term: name,
        total_awards_found: result.page_metadata.total,
        showing: awards.len(),
        statistics: statistics_digest(awards),
        recent_awards: awards.iter().map(transform_award_result).collect(),
    })
}

/// Recipient search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/search-recipients",
        get(search_recipients_get)
            .post(search_recipients_post)
            .options(super::system::preflight),
    )
}
