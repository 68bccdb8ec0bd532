// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::load_console_config;
use crate::infrastructure::http_api::HttpBookkeepingApi;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ledger_console=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_console_config()?;

    // Create API client (infrastructure layer)
    let api = Arc::new(HttpBookkeepingApi::new(&config.api)?);

    // Create services (application layer)
    let state = Arc::new(AppState::new(api, config.dashboard.clone()));

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(
        "Starting ledger console on {} (API at {})",
        listener.local_addr()?,
        config.api.base_url
    );

    axum::serve(listener, router).await?;

    Ok(())
}
