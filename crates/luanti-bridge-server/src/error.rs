//! Error types for the bridge HTTP layer.
//!
//! [`BridgeError`] covers every protocol failure a request can hit. It
//! converts into an Axum response whose body is `{"error": "<message>"}`,
//! with a fixed, machine-readable message per variant. Details such as the
//! JSON parser position go to the log, not to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur while handling a bridge request.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The request body was empty, `null`, or an empty collection.
    #[error("missing payload")]
    MissingPayload,

    /// The request body was not valid JSON.
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No route matches the method and path.
    #[error("not found")]
    NotFound,
}

impl BridgeError {
    /// The HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingPayload | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// The message placed in the response's `error` field.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingPayload => "missing payload",
            Self::InvalidJson(_) => "invalid json",
            Self::NotFound => "not found",
        }
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");

        let body = serde_json::json!({
            "error": self.message(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn protocol_errors_are_client_errors() {
        assert_eq!(BridgeError::MissingPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(BridgeError::NotFound.status(), StatusCode::NOT_FOUND);

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BridgeError::from(parse);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "invalid json");
        assert!(err.to_string().starts_with("invalid json: "));
    }
}
