//! Competition analysis handler: rolls one page of awards up by recipient.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::{DEFAULT_SORT_FIELD, default_date_window};
use crate::api::dto::{AnalyzeCompetitionRequest, AnalyzeCompetitionResponse, DateRange};
use crate::app_state::AppState;
use crate::domain::{
    COMPETITION_FIELDS, DEFAULT_ROLLUP_LIMIT, SearchCriteria, build_award_filters, market_size,
    rollup_recipients, transform_competition_recipient,
};
use crate::error::{ErrorResponse, GatewayError};
use crate::upstream::types::{AwardSearchParams, SortOrder};

/// Awards fetched per analysis. Larger than the recipient cap so the
/// rollup sees enough of the market.
const ANALYSIS_PAGE_SIZE: u32 = 100;

/// `POST /analyze-competition` — Top recipients and market share for a
/// market segment.
///
/// # Errors
///
/// Returns [`GatewayError`] when the upstream call fails.
#[utoipa::path(
    post,
    path = "/analyze-competition",
    tag = "Analysis",
    summary = "Analyze competitive landscape",
    description = "Rolls awards up by recipient over the requested market segment and \
                   returns the top recipients with market-share ratios. Dates default \
                   to the last year.",
    responses(
        (status = 200, description = "Competition analysis", body = AnalyzeCompetitionResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse),
    )
)]
pub async fn analyze_competition(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeCompetitionRequest>,
) -> Result<Json<AnalyzeCompetitionResponse>, GatewayError> {
    let (default_start, default_end) = default_date_window(1);
    let start = match req.criteria.activity_start_date.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default_start,
    };
    let end = match req.criteria.activity_end_date.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default_end,
    };

    // Only the market-segment criteria participate here; pagination and
    // recipient filters stay out of the analyzed population.
    let criteria = SearchCriteria {
        keywords: req.criteria.keywords,
        agency_name: req.criteria.agency_name,
        naics_codes: req.criteria.naics_codes,
        psc_codes: req.criteria.psc_codes,
        activity_start_date: Some(start.clone()),
        activity_end_date: Some(end.clone()),
        min_amount: req.criteria.min_amount,
        ..SearchCriteria::default()
    };

    let params = AwardSearchParams {
        filters: build_award_filters(&criteria),
        fields: COMPETITION_FIELDS.iter().map(ToString::to_string).collect(),
        limit: ANALYSIS_PAGE_SIZE,
        page: 1,
        sort: DEFAULT_SORT_FIELD.to_string(),
        order: SortOrder::Desc,
    };

    let result = state.spending_client.search_awards(&params).await?;

    let rollups = rollup_recipients(&result.results, req.limit.unwrap_or(DEFAULT_ROLLUP_LIMIT));
    let total_market_size = market_size(&rollups);
    let top_recipients: Vec<_> = rollups
        .iter()
        .map(|r| transform_competition_recipient(r, total_market_size))
        .collect();

    Ok(Json(AnalyzeCompetitionResponse {
        summary: format!(
            "Competitive analysis showing top {} recipients",
            top_recipients.len()
        ),
        total_awards_analyzed: result.page_metadata.total,
        total_market_size,
        date_range: DateRange { start, end },
        top_recipients,
    }))
}

/// Competition analysis routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/analyze-competition",
        post(analyze_competition).options(super::system::preflight),
    )
}
