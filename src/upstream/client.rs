//! Thin HTTP client for the USAspending.gov v2 search API.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::UpstreamError;
use super::types::{
    AwardSearchParams, AwardSearchResponse, SpendingOverTimeParams, SpendingOverTimeResponse,
};
use crate::config::GatewayConfig;

/// Path of the award search endpoint.
const SPENDING_BY_AWARD_PATH: &str = "/api/v2/search/spending_by_award/";
/// Path of the spending-over-time endpoint.
const SPENDING_OVER_TIME_PATH: &str = "/api/v2/search/spending_over_time/";

/// Longest upstream body snippet kept in error values and logs.
const MAX_BODY_SNIPPET: usize = 500;

/// Client for the two upstream operations this gateway proxies.
///
/// Stateless apart from the connection pool inside `reqwest::Client`;
/// one instance is shared by all handlers. Each call is a single attempt
/// with no retries.
#[derive(Debug, Clone)]
pub struct SpendingClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpendingClient {
    /// Creates a client from gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        Self::with_base_url(&config.upstream_base_url, config.upstream_timeout_secs)
    }

    /// Creates a client against an arbitrary base URL. Used by tests to
    /// point the gateway at a mock upstream.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Searches awards matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on network failure, a non-2xx status,
    /// or an undecodable body.
    pub async fn search_awards(
        &self,
        params: &AwardSearchParams,
    ) -> Result<AwardSearchResponse, UpstreamError> {
        self.post(SPENDING_BY_AWARD_PATH, params).await
    }

    /// Fetches spending totals grouped into time buckets.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on network failure, a non-2xx status,
    /// or an undecodable body.
    pub async fn spending_over_time(
        &self,
        params: &SpendingOverTimeParams,
    ) -> Result<SpendingOverTimeResponse, UpstreamError> {
        self.post(SPENDING_OVER_TIME_PATH, params).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, UpstreamError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let snippet = truncate_body(&text);
            tracing::error!(%url, status = status.as_u16(), body = %snippet, "upstream request failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(%url, error = %e, body = %truncate_body(&text), "upstream body not decodable");
            e
        })?;
        Ok(parsed)
    }
}

/// Truncates a response body to a loggable snippet on a char boundary.
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while end > 0 && !body.is_char_boundary(end) {
        end -= 1;
    }
    let mut snippet = body.get(..end).unwrap_or_default().to_string();
    snippet.push('…');
    snippet
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(400);
        let snippet = truncate_body(&body);
        assert!(snippet.len() <= MAX_BODY_SNIPPET + '…'.len_utf8());
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = SpendingClient::with_base_url("http://localhost:8080/", 30).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
