//! # User API Server
//!
//! Entry point for a minimal REST API exposing CRUD operations over an
//! in-memory collection of user records.
//!
//! Startup sequence:
//! 1. Initialize structured logging
//! 2. Load configuration from environment variables
//! 3. Construct the seeded store and application state
//! 4. Build the router and start the HTTP server

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_api_server::config::Config;
use user_api_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug for this one.
    // Override with the RUST_LOG environment variable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_api_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // Explicit construction: the state owns the seeded store, and the
    // router gets an explicit handle to it.
    let app_state = AppState::new();
    tracing::info!("Application state initialized");

    let app = user_api_server::app(app_state);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
