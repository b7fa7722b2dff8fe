//! HTTP server: lookup page and JSON API.
//!
//! Provides:
//! - `GET /` - the lookup page
//! - `POST /api/analyze-domains` - JSON batch lookup
//! - `POST /api/analyze-domains/csv` - the same batch as a CSV download
//! - `GET /health` - liveness probe

mod handlers;
mod types;

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::error_handling::InitializationError;
use crate::initialization::init_resolver;
use crate::providers::ProviderTable;

pub use handlers::parse_domains;
pub use types::{AnalyzeResponse, AppState, ErrorResponse};

/// Builds the router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/analyze-domains", post(handlers::analyze_handler))
        .route("/api/analyze-domains/csv", post(handlers::analyze_csv_handler))
        .with_state(state)
}

/// Binds the listener and serves until Ctrl-C.
pub async fn start_server(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| InitializationError::BindError {
            addr: addr.to_string(),
            source,
        })?;

    log::info!("Server listening on http://{}/", addr);
    log::info!("  - API: POST http://{}/api/analyze-domains", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

/// Loads the provider table, initializes the resolver, and serves.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let providers = ProviderTable::load_or_empty(config.providers.as_deref()).await;
    let resolver = init_resolver();
    let state = AppState::new(resolver, Arc::new(providers))
        .with_max_concurrency(config.max_concurrency);
    start_server(&config.listen_address(), state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
