//! The envelope stored in the command queue.
//!
//! The bridge accepts any JSON value as a command. Values that are exactly
//! the wire form of a known [`Action`] are held typed; everything else is
//! kept verbatim so a host that understands newer command types still
//! receives them. Either way the value drained from the queue serializes to
//! the same JSON that was enqueued.

use serde::Serialize;
use serde_json::Value;

use crate::actions::Action;

/// Kind reported for payloads without a string `type` field.
const UNKNOWN_KIND: &str = "unknown";

/// One queued command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Command {
    /// A recognized action.
    Action(Action),
    /// Any other JSON payload, passed through untouched.
    Opaque(Value),
}

impl Command {
    /// Classify a JSON payload.
    ///
    /// The payload becomes [`Command::Action`] only when re-serializing the
    /// parsed action reproduces it exactly (no extra keys, no integer
    /// speeds widened to floats, no defaults filled in). Otherwise it is
    /// kept as [`Command::Opaque`].
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<Action>(value.clone()) {
            Ok(action) if serde_json::to_value(&action).is_ok_and(|v| v == value) => {
                Self::Action(action)
            }
            _ => Self::Opaque(value),
        }
    }

    /// The command's `type` string, or `"unknown"` if it has none.
    pub fn kind(&self) -> &str {
        match self {
            Self::Action(action) => action.kind(),
            Self::Opaque(value) => value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_KIND),
        }
    }

    /// Whether this command is a recognized action.
    pub const fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Value> for Command {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;
    use crate::actions::Direction;

    #[test]
    fn known_action_is_typed() {
        let cmd = Command::from_value(json!({"type": "move", "direction": "forward", "speed": 1.0}));
        assert_eq!(cmd, Command::Action(Action::movement(Direction::Forward)));
        assert_eq!(cmd.kind(), "move");
    }

    #[test]
    fn unknown_type_passes_through() {
        let raw = json!({"type": "craft", "recipe": "default:torch"});
        let cmd = Command::from_value(raw.clone());
        assert!(!cmd.is_action());
        assert_eq!(cmd.kind(), "craft");
        assert_eq!(serde_json::to_value(&cmd).unwrap(), raw);
    }

    #[test]
    fn extra_fields_are_preserved() {
        let raw = json!({"type": "dig", "tool": "pick"});
        let cmd = Command::from_value(raw.clone());
        assert!(!cmd.is_action());
        assert_eq!(serde_json::to_value(&cmd).unwrap(), raw);
    }

    #[test]
    fn integer_speed_is_not_rewritten() {
        let raw = json!({"type": "move", "direction": "left", "speed": 2});
        let cmd = Command::from_value(raw.clone());
        assert_eq!(serde_json::to_value(&cmd).unwrap(), raw);
    }

    #[test]
    fn defaults_are_not_filled_in() {
        let raw = json!({"type": "place"});
        let cmd = Command::from_value(raw.clone());
        assert_eq!(serde_json::to_value(&cmd).unwrap(), raw);
    }

    #[test]
    fn non_object_payloads_are_opaque() {
        for raw in [json!("jump"), json!(42), json!([1, 2])] {
            let cmd = Command::from_value(raw.clone());
            assert_eq!(cmd.kind(), "unknown");
            assert_eq!(serde_json::to_value(&cmd).unwrap(), raw);
        }
    }

    #[test]
    fn action_serializes_as_its_wire_form() {
        let cmd = Command::from(Action::chat("hi"));
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "chat", "message": "hi"})
        );
    }
}
