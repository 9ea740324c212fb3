//! Bridge server entry point.
//!
//! Initializes logging, loads the bind address from the environment, and
//! serves the command queue over HTTP until `Ctrl-C`.
//!
//! # Environment
//!
//! - `BRIDGE_HOST` -- bind address (default `0.0.0.0`)
//! - `BRIDGE_PORT` -- TCP port (default `8000`)
//! - `RUST_LOG` -- tracing filter (default `info`)

use std::sync::Arc;

use luanti_bridge_server::{AppState, ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails to
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("luanti-bridge-server starting");

    let config = ServerConfig::from_env()?;
    info!(host = %config.host, port = config.port, "configuration loaded");

    let state = Arc::new(AppState::new());
    start_server(&config, state).await?;

    Ok(())
}
