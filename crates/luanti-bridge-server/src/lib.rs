//! Command queue bridge between an agent controller and a Luanti game host.
//!
//! The game host cannot run control logic itself, so it polls this server
//! for pending commands while the controller pushes them asynchronously.
//! This crate provides:
//!
//! - **[`CommandQueue`]** -- an unbounded, thread-safe FIFO with drain-all
//!   semantics
//! - **HTTP endpoints** binding the queue to the network: `GET /health`,
//!   `POST /enqueue` (controller side), and `GET /next` (host side)
//!
//! # Architecture
//!
//! ```text
//! controller --POST /enqueue--> CommandQueue --GET /next--> game host
//! ```
//!
//! The queue is owned by an [`AppState`] built by the caller and injected
//! into every handler, so independent servers (and tests) never share
//! state. Nothing is persisted: an undrained queue is lost on restart.

pub mod error;
pub mod handlers;
pub mod payload;
pub mod queue;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use queue::CommandQueue;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, spawn_server, start_server};
pub use state::AppState;
