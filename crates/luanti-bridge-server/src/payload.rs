//! Normalization of `/enqueue` request bodies.
//!
//! The endpoint accepts either one command object or an array of them.
//! [`parse_body`] turns both shapes into a non-empty, ordered list before
//! anything touches the queue.

use serde_json::Value;

use crate::error::BridgeError;

/// Parse a raw request body into the commands it carries, in order.
///
/// - empty or whitespace-only body: [`BridgeError::MissingPayload`]
/// - malformed JSON: [`BridgeError::InvalidJson`]
/// - `null`, `[]`, or `{}`: [`BridgeError::MissingPayload`]
/// - an array: its elements
/// - any other value: a one-element list
pub fn parse_body(body: &[u8]) -> Result<Vec<Value>, BridgeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(BridgeError::MissingPayload);
    }

    let payload: Value = serde_json::from_slice(body)?;
    normalize(payload)
}

/// Normalize a parsed payload to a non-empty list of commands.
pub fn normalize(payload: Value) -> Result<Vec<Value>, BridgeError> {
    match payload {
        Value::Null => Err(BridgeError::MissingPayload),
        Value::Array(items) if items.is_empty() => Err(BridgeError::MissingPayload),
        Value::Object(map) if map.is_empty() => Err(BridgeError::MissingPayload),
        Value::Array(items) => Ok(items),
        single => Ok(vec![single]),
    }
}
