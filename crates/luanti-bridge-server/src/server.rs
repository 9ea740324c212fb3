//! Bridge HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP address and serves the
//! bridge until `Ctrl-C` is received, plus [`serve`] and [`spawn_server`]
//! for callers (and tests) that bring their own listener.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 8000;

/// Configuration for the bridge server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `BRIDGE_HOST` -- bind address (default `0.0.0.0`)
    /// - `BRIDGE_PORT` -- TCP port (default `8000`)
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BRIDGE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("BRIDGE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid BRIDGE_PORT {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Resolve the configured host and port into a socket address.
    ///
    /// Accepts IP literals (including bare IPv6 such as `::`) and host
    /// names; names are resolved and the first address is used.
    pub async fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| ServerError::Bind(format!("cannot resolve {}: {e}", self.host)))?;

        addrs
            .next()
            .ok_or_else(|| ServerError::Bind(format!("no address found for {}", self.host)))
    }
}

/// Start the bridge HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C`. Returns `Ok(())` on clean shutdown.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr().await?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    serve(listener, state).await
}

/// Serve the bridge on an already-bound listener until `Ctrl-C`.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the server hits a fatal I/O error.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    let router = build_router(state);

    match listener.local_addr() {
        Ok(addr) => info!(%addr, "bridge server listening"),
        Err(e) => warn!(error = %e, "bridge server listening on unknown address"),
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("bridge server stopped");
    Ok(())
}

/// Run the bridge on a background Tokio task.
///
/// The caller keeps the returned handle and aborts or awaits it on
/// shutdown. Serve errors are logged, not returned.
pub fn spawn_server(listener: TcpListener, state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = serve(listener, state).await {
            tracing::error!(error = %e, "bridge server exited with error");
        }
    })
}

/// Resolve when the process receives `Ctrl-C`.
///
/// If the signal handler cannot be installed the server runs until the
/// process is killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Errors that can occur when starting or running the bridge server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
