//! Configuration for the bridge client.

use std::time::Duration;

use crate::error::ClientError;

/// Bridge URL used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Client connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the bridge, without a trailing path.
    pub server_url: String,
    /// Upper bound on every request, connect included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Settings for the bridge at `server_url` with the default timeout.
    pub fn with_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `BRIDGE_URL` -- bridge base URL (default `http://localhost:8000`)
    /// - `BRIDGE_TIMEOUT_MS` -- request timeout in milliseconds (default 1000)
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup("BRIDGE_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());

        let timeout = match lookup("BRIDGE_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|e| {
                    ClientError::Config(format!("invalid BRIDGE_TIMEOUT_MS {raw:?}: {e}"))
                })?;
                if ms == 0 {
                    return Err(ClientError::Config(String::from(
                        "BRIDGE_TIMEOUT_MS must be greater than zero",
                    )));
                }
                Duration::from_millis(ms)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            server_url,
            timeout,
        })
    }
}
