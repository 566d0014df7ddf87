//! Error type for the upstream spending-data client.

/// Errors surfaced by [`super::SpendingClient`].
///
/// Handlers catch these at the boundary and convert them into a generic
/// HTTP 500; the detail lives in the server-side log, never in the
/// response body.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for logging.
        body: String,
    },

    /// The upstream body was not valid JSON for the expected shape.
    #[error("upstream response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
