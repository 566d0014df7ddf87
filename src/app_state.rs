//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::upstream::SpendingClient;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The client is the only shared object; it holds no request state, so
/// concurrent requests never contend.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Injected upstream client. Tests substitute one pointed at a mock
    /// server.
    pub spending_client: Arc<SpendingClient>,
}
