//! Spending-over-time handler: grouped totals with a trend classification.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{SpendingOverTimeRequest, SpendingTrendResponse};
use crate::app_state::AppState;
use crate::domain::{SearchCriteria, build_award_filters, classify_trend};
use crate::error::{ErrorResponse, GatewayError};
use crate::upstream::types::SpendingOverTimeParams;

/// Grouping applied when the caller does not choose one.
const DEFAULT_GROUP: &str = "fiscal_year";

/// `POST /spending-over-time` — Spending totals bucketed by time period.
///
/// # Errors
///
/// Returns [`GatewayError`] when the upstream call fails.
#[utoipa::path(
    post,
    path = "/spending-over-time",
    tag = "Analysis",
    summary = "Spending trend over time",
    description = "Groups matching spending into time buckets and classifies the trend \
                   between the first and last bucket.",
    responses(
        (status = 200, description = "Grouped spending with trend direction", body = SpendingTrendResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse),
    )
)]
pub async fn spending_over_time(
    State(state): State<AppState>,
    Json(req): Json<SpendingOverTimeRequest>,
) -> Result<Json<SpendingTrendResponse>, GatewayError> {
    let group = req
        .group
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| DEFAULT_GROUP.to_string());

    // Amount and location filters are not part of the trend query.
    let criteria = SearchCriteria {
        keywords: req.criteria.keywords,
        recipient_name: req.criteria.recipient_name,
        agency_name: req.criteria.agency_name,
        naics_codes: req.criteria.naics_codes,
        psc_codes: req.criteria.psc_codes,
        activity_start_date: req.criteria.activity_start_date,
        activity_end_date: req.criteria.activity_end_date,
        ..SearchCriteria::default()
    };

    let params = SpendingOverTimeParams {
        filters: build_award_filters(&criteria),
        group: group.clone(),
    };

    let result = state.spending_client.spending_over_time(&params).await?;

    Ok(Json(SpendingTrendResponse {
        summary: format!("Spending trends grouped by {group}"),
        group_by: group,
        trend_direction: classify_trend(&result.results),
        results: result.results,
    }))
}

/// Spending-over-time routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/spending-over-time",
        post(spending_over_time).options(super::system::preflight),
    )
}
