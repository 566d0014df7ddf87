//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Handlers
//! return it from any failure path; the [`IntoResponse`] impl is the single
//! place a failure becomes an HTTP error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::upstream::UpstreamError;

/// JSON error envelope returned on every failed request.
///
/// ```json
/// { "error": "name query parameter is required" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A required request parameter or body field is missing.
    #[error("{0}")]
    MissingParameter(String),

    /// The upstream spending-data call failed. The inner detail is logged
    /// but never exposed to the caller.
    #[error("upstream spending data request failed")]
    Upstream(#[from] UpstreamError),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let Self::Upstream(ref inner) = self {
            tracing::error!(error = %inner, "request failed at upstream boundary");
        }
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_maps_to_400() {
        let err = GatewayError::MissingParameter("name field is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name field is required");
    }

    #[test]
    fn upstream_failure_maps_to_500_with_generic_message() {
        let err = GatewayError::Upstream(UpstreamError::Status {
            status: 503,
            body: "secret upstream detail".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("secret"));
    }
}
