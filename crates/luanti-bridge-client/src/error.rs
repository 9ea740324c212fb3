//! Error types for the bridge client.
//!
//! The public send methods fold these into `false`; they surface directly
//! only from [`AgentClient::update_observation`] and from the `try_*`
//! variants.
//!
//! [`AgentClient::update_observation`]: crate::AgentClient::update_observation

/// Errors that can occur while talking to the bridge.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed, so no request can be made.
    #[error("HTTP client unavailable: {0}")]
    Unavailable(String),

    /// Connection refused, timeout, DNS failure, or another transport fault.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The bridge answered with a status other than 200.
    #[error("bridge returned HTTP {0}")]
    Status(u16),

    /// An action failed its field checks and was not sent.
    #[error("invalid action: {0}")]
    InvalidAction(#[from] luanti_bridge_types::ActionError),

    /// An observation payload was missing a field or had the wrong shape.
    #[error("invalid observation: {0}")]
    Observation(#[from] serde_json::Error),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}
