//! The agent-side bridge client.
//!
//! [`AgentClient`] wraps a `reqwest` client with a bounded timeout. The
//! `try_*` methods return the full [`ClientError`]; the plain methods fold
//! every failure into `false` after logging it.
//!
//! The observation cache is local only. The host does not push observations
//! back over the bridge yet, so [`AgentClient::get_observation`] returns
//! whatever was last passed to [`AgentClient::update_observation`].

use luanti_bridge_types::{Action, Observation};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Client for pushing actions to the bridge.
#[derive(Debug)]
pub struct AgentClient {
    /// `None` when the HTTP client could not be built.
    http: Option<reqwest::Client>,
    /// Bridge base URL with any trailing slash removed.
    server_url: String,
    /// Most recent observation set through [`Self::update_observation`].
    last_observation: Option<Observation>,
}

impl AgentClient {
    /// Create a client for the configured bridge.
    ///
    /// Never fails. If the HTTP client cannot be built the failure is
    /// logged and every network call on this client reports `false`.
    pub fn new(config: ClientConfig) -> Self {
        let http = match reqwest::Client::builder().timeout(config.timeout).build() {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(error = %e, "HTTP client unavailable, bridge calls will fail");
                None
            }
        };

        Self {
            http,
            server_url: config.server_url.trim_end_matches('/').to_owned(),
            last_observation: None,
        }
    }

    /// Bridge base URL this client talks to.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Queue one action. `true` only if the bridge answered 200.
    pub async fn send_action(&self, action: &Action) -> bool {
        match self.try_send_action(action).await {
            Ok(()) => true,
            Err(e) => {
                warn!(kind = action.kind(), error = %e, "failed to send action");
                false
            }
        }
    }

    /// Queue several actions in one request, preserving order.
    ///
    /// `true` only if the bridge answered 200. An empty slice is rejected
    /// by the bridge and therefore reports `false`.
    pub async fn send_actions(&self, actions: &[Action]) -> bool {
        match self.try_send_actions(actions).await {
            Ok(()) => true,
            Err(e) => {
                warn!(count = actions.len(), error = %e, "failed to send actions");
                false
            }
        }
    }

    /// Queue one action, returning the failure reason.
    pub async fn try_send_action(&self, action: &Action) -> Result<(), ClientError> {
        action.validate()?;
        self.post_enqueue(action).await
    }

    /// Queue several actions in one request, returning the failure reason.
    ///
    /// Nothing is sent if any action fails validation.
    pub async fn try_send_actions(&self, actions: &[Action]) -> Result<(), ClientError> {
        for action in actions {
            action.validate()?;
        }
        self.post_enqueue(actions).await
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    /// Probe `GET /health`. `true` only if the bridge answered 200.
    pub async fn health(&self) -> bool {
        match self.try_health().await {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "bridge health check failed");
                false
            }
        }
    }

    /// Probe `GET /health`, returning the failure reason.
    pub async fn try_health(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.server_url);
        let response = self.http()?.get(&url).send().await?;
        check_status(response.status())
    }

    // -----------------------------------------------------------------------
    // Observations
    // -----------------------------------------------------------------------

    /// The last observation stored locally, if any.
    pub const fn get_observation(&self) -> Option<&Observation> {
        self.last_observation.as_ref()
    }

    /// Parse and cache an observation payload.
    ///
    /// Parsing is strict; on failure the previously cached observation is
    /// kept unchanged.
    pub fn update_observation(
        &mut self,
        data: serde_json::Value,
    ) -> Result<&Observation, ClientError> {
        let observation = Observation::from_value(data)?;
        let stored: &Observation = self.last_observation.insert(observation);
        Ok(stored)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn http(&self) -> Result<&reqwest::Client, ClientError> {
        self.http.as_ref().ok_or_else(|| {
            ClientError::Unavailable(String::from("client could not be initialized"))
        })
    }

    async fn post_enqueue<T>(&self, body: &T) -> Result<(), ClientError>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}/enqueue", self.server_url);
        let response = self.http()?.post(&url).json(body).send().await?;
        check_status(response.status())
    }
}

impl Default for AgentClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

fn check_status(status: StatusCode) -> Result<(), ClientError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ClientError::Status(status.as_u16()))
    }
}
