//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root so tool callers can use short
//! paths like `/search-awards`. Allow-all CORS headers are stamped onto
//! every response here; `OPTIONS` preflights are answered 204 by the
//! per-route [`handlers::system::preflight`] handler.

pub mod dto;
pub mod handlers;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints and CORS
/// response headers.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
