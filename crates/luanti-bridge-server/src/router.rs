//! Axum router construction for the bridge.
//!
//! Assembles the three endpoints into a single [`Router`] with request
//! tracing and permissive CORS (the bridge assumes a trusted local network).

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the bridge server.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `POST /enqueue` -- producer-facing append
/// - `GET /next` -- consumer-facing drain
///
/// A wrong method on a known path is answered like an unknown path: 404
/// with `{"error": "not found"}`, never 405.
///
/// Request bodies are unbounded: a command of any size is accepted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/health",
            get(handlers::health).fallback(handlers::not_found),
        )
        .route(
            "/enqueue",
            post(handlers::enqueue).fallback(handlers::not_found),
        )
        .route("/next", get(handlers::next).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
