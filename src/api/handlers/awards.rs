//! Award search handler: a paginated, filtered proxy of the upstream
//! search endpoint.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::{DEFAULT_SORT_FIELD, parse_order};
use crate::api::dto::{SearchAwardsRequest, SearchAwardsResponse};
use crate::app_state::AppState;
use crate::domain::{AWARD_FIELDS, build_award_filters, transform_award_result};
use crate::error::{ErrorResponse, GatewayError};
use crate::upstream::types::AwardSearchParams;

/// `POST /search-awards` — Search federal contract awards.
///
/// # Errors
///
/// Returns [`GatewayError`] when the upstream call fails.
#[utoipa::path(
    post,
    path = "/search-awards",
    tag = "Search",
    summary = "Search awards",
    description = "Searches federal contract awards with the supplied criteria and \
                   returns one simplified page of results.",
    responses(
        (status = 200, description = "Matching awards", body = SearchAwardsResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse),
    )
)]
pub async fn search_awards(
    State(state): State<AppState>,
    Json(req): Json<SearchAwardsRequest>,
) -> Result<Json<SearchAwardsResponse>, GatewayError> {
    let params = AwardSearchParams {
        filters: build_award_filters(&req.criteria),
        fields: AWARD_FIELDS.iter().map(ToString::to_string).collect(),
        limit: req.limit.unwrap_or(10),
        page: req.page.unwrap_or(1),
        sort: req
            .sort
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
        order: parse_order(req.order.as_deref()),
    };

    let result = state.spending_client.search_awards(&params).await?;

    let awards: Vec<_> = result.results.iter().map(transform_award_result).collect();
    Ok(Json(SearchAwardsResponse {
        summary: format!(
            "Found {} awards (showing {})",
            result.page_metadata.total,
            awards.len()
        ),
        total: result.page_metadata.total,
        page: result.page_metadata.page,
        has_next: result.page_metadata.has_next,
        awards,
    }))
}

/// Award search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/search-awards",
        post(search_awards).options(super::system::preflight),
    )
}
