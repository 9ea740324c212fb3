//! HTTP endpoint handlers for the bridge server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe, always `{"ok": true}` |
//! | `POST` | `/enqueue` | Append one command or an array of commands |
//! | `GET` | `/next` | Drain every pending command, oldest first |
//!
//! Every other method/path combination answers 404 via [`not_found`].

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use luanti_bridge_types::Command;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::BridgeError;
use crate::payload::parse_body;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true` while the server is up.
    pub ok: bool,
}

/// Body of a successful `POST /enqueue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnqueueResponse {
    /// Number of commands appended.
    pub queued: usize,
}

/// Body of `GET /next`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextResponse {
    /// Drained commands, oldest first.
    pub commands: Vec<Command>,
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness. No side effects.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

// ---------------------------------------------------------------------------
// POST /enqueue
// ---------------------------------------------------------------------------

/// Append the commands in the request body to the queue.
///
/// The body is read as raw bytes so no `Content-Type` header is required.
/// A rejected body leaves the queue untouched.
pub async fn enqueue(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EnqueueResponse>, BridgeError> {
    let commands: Vec<Command> = parse_body(&body)?
        .into_iter()
        .map(Command::from_value)
        .collect();

    for cmd in &commands {
        debug!(kind = cmd.kind(), typed = cmd.is_action(), "command accepted");
    }

    let queued = state.queue.enqueue(commands);
    info!(queued, "commands enqueued");

    Ok(Json(EnqueueResponse { queued }))
}

// ---------------------------------------------------------------------------
// GET /next
// ---------------------------------------------------------------------------

/// Drain every pending command. Returns immediately, even when empty.
pub async fn next(State(state): State<Arc<AppState>>) -> Json<NextResponse> {
    let commands = state.queue.drain();
    if !commands.is_empty() {
        info!(count = commands.len(), "commands drained");
    }
    Json(NextResponse { commands })
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Answer any unmatched method or path with 404.
pub async fn not_found() -> impl IntoResponse {
    BridgeError::NotFound
}
