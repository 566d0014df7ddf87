//! fedspend-gateway server entry point.
//!
//! Starts the Axum HTTP server with the award-search REST endpoints.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fedspend_gateway::api;
use fedspend_gateway::app_state::AppState;
use fedspend_gateway::config::GatewayConfig;
use fedspend_gateway::upstream::SpendingClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, upstream = %config.upstream_base_url, "starting fedspend-gateway");

    // Build the injected upstream client
    let spending_client = Arc::new(SpendingClient::new(&config)?);

    let app_state = AppState { spending_client };

    // Build router; CORS response headers and preflight handling live in
    // the router itself.
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
