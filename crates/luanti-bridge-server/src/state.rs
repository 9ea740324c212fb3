//! Shared application state for the bridge server.
//!
//! The server is stateless request/response apart from the command queue,
//! so [`AppState`] holds only that. It is built by the composition root and
//! handed to the router wrapped in [`Arc`](std::sync::Arc).

use crate::queue::CommandQueue;

/// Shared state for the Axum application.
#[derive(Debug, Default)]
pub struct AppState {
    /// Commands waiting for the game host.
    pub queue: CommandQueue,
}

impl AppState {
    /// Create state with an empty queue.
    pub const fn new() -> Self {
        Self {
            queue: CommandQueue::new(),
        }
    }
}
