//! Agent-side client for the Luanti command queue bridge.
//!
//! [`AgentClient`] turns typed [`Action`](luanti_bridge_types::Action)s into
//! `POST /enqueue` calls and keeps a local cache of the last
//! [`Observation`](luanti_bridge_types::Observation).
//!
//! Every network call is bounded by a short timeout and reports a plain
//! `bool`: `true` means the bridge accepted the request, nothing more. The
//! command may still never be drained or executed by the game host. Failures
//! are logged rather than raised so a control loop keeps running through
//! transient network trouble; retrying is up to the caller.
//!
//! ```rust,ignore
//! use luanti_bridge_client::{AgentClient, ClientConfig};
//! use luanti_bridge_types::Action;
//!
//! let client = AgentClient::new(ClientConfig::default());
//! if !client.send_action(&Action::forward()).await {
//!     // bridge unreachable, try again next iteration
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::AgentClient;
pub use config::ClientConfig;
pub use error::ClientError;
