//! Agent actions pushed from the controller to the game host.
//!
//! Every action serializes to a JSON object with a `type` discriminator and
//! its variant-specific fields. Optional fields that were never set are left
//! out of the JSON entirely: the host treats the presence of a key as the
//! signal that the value was set, so `null` would be read as a real value.
//!
//! ```text
//! {"type": "move", "direction": "forward", "speed": 1.0}
//! {"type": "rotate", "yaw_delta": 0.5}
//! {"type": "set_observation_options", "options": {"filter_occluded_blocks": true}}
//! ```

use serde::{Deserialize, Serialize};

/// Speed multiplier used when a move is built or received without one.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Node placed when a place action does not name one.
pub const DEFAULT_NODE_NAME: &str = "default:dirt";

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Movement direction relative to the agent's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Along the look direction.
    Forward,
    /// Opposite the look direction.
    Backward,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Jump / fly up.
    Up,
    /// Sneak / fly down.
    Down,
}

impl Direction {
    /// The wire name of this direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

// ---------------------------------------------------------------------------
// ObservationOptions
// ---------------------------------------------------------------------------

/// Observation settings the host applies to every snapshot it collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationOptions {
    /// Drop blocks that are fully enclosed by solid neighbors.
    pub filter_occluded_blocks: bool,
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single command for the game host to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Walk in a direction.
    Move {
        /// Which way to move.
        direction: Direction,
        /// Speed multiplier, must be positive.
        #[serde(default = "default_speed")]
        speed: f64,
    },
    /// Turn by relative angles.
    Rotate {
        /// Change in yaw (horizontal), in radians.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        yaw_delta: Option<f64>,
        /// Change in pitch (vertical), in radians.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pitch_delta: Option<f64>,
    },
    /// Face absolute angles.
    LookAt {
        /// Absolute yaw, in radians.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        yaw: Option<f64>,
        /// Absolute pitch, in radians.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pitch: Option<f64>,
    },
    /// Dig the node under the look target.
    Dig,
    /// Place a node at the look target.
    Place {
        /// Registered node name, e.g. `default:stone`.
        #[serde(default = "default_node_name")]
        node_name: String,
    },
    /// Use / right-click the look target.
    Use,
    /// Change how the host collects observations.
    SetObservationOptions {
        /// The new settings.
        options: ObservationOptions,
    },
    /// Say something in game chat.
    Chat {
        /// Message text. The bridge enforces no length limit.
        message: String,
    },
}

const fn default_speed() -> f64 {
    DEFAULT_SPEED
}

fn default_node_name() -> String {
    DEFAULT_NODE_NAME.to_owned()
}

/// An action whose fields are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// Move speed was zero, negative, or not a finite number.
    #[error("move speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),

    /// An angle was NaN or infinite.
    #[error("{field} must be a finite angle, got {value}")]
    InvalidAngle {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Action {
    /// Move in `direction` at [`DEFAULT_SPEED`].
    pub const fn movement(direction: Direction) -> Self {
        Self::Move {
            direction,
            speed: DEFAULT_SPEED,
        }
    }

    /// Move forward at [`DEFAULT_SPEED`].
    pub const fn forward() -> Self {
        Self::movement(Direction::Forward)
    }

    /// Move in `direction` at an explicit speed.
    pub const fn move_at(direction: Direction, speed: f64) -> Self {
        Self::Move { direction, speed }
    }

    /// Rotate by the given deltas. `None` leaves that axis untouched.
    pub const fn rotate(yaw_delta: Option<f64>, pitch_delta: Option<f64>) -> Self {
        Self::Rotate {
            yaw_delta,
            pitch_delta,
        }
    }

    /// Look at absolute angles. `None` leaves that axis untouched.
    pub const fn look_at(yaw: Option<f64>, pitch: Option<f64>) -> Self {
        Self::LookAt { yaw, pitch }
    }

    /// Place the named node.
    pub fn place(node_name: impl Into<String>) -> Self {
        Self::Place {
            node_name: node_name.into(),
        }
    }

    /// Place [`DEFAULT_NODE_NAME`].
    pub fn place_default() -> Self {
        Self::place(DEFAULT_NODE_NAME)
    }

    /// Toggle occlusion filtering on the host.
    pub const fn set_observation_options(filter_occluded_blocks: bool) -> Self {
        Self::SetObservationOptions {
            options: ObservationOptions {
                filter_occluded_blocks,
            },
        }
    }

    /// Send a chat message.
    pub fn chat(message: impl Into<String>) -> Self {
        Self::Chat {
            message: message.into(),
        }
    }

    /// The `type` discriminator written to the wire.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Rotate { .. } => "rotate",
            Self::LookAt { .. } => "look_at",
            Self::Dig => "dig",
            Self::Place { .. } => "place",
            Self::Use => "use",
            Self::SetObservationOptions { .. } => "set_observation_options",
            Self::Chat { .. } => "chat",
        }
    }

    /// Check field constraints before the action is sent.
    pub fn validate(&self) -> Result<(), ActionError> {
        match self {
            Self::Move { speed, .. } => {
                if speed.is_finite() && *speed > 0.0 {
                    Ok(())
                } else {
                    Err(ActionError::InvalidSpeed(*speed))
                }
            }
            Self::Rotate {
                yaw_delta,
                pitch_delta,
            } => {
                check_angle("yaw_delta", *yaw_delta)?;
                check_angle("pitch_delta", *pitch_delta)
            }
            Self::LookAt { yaw, pitch } => {
                check_angle("yaw", *yaw)?;
                check_angle("pitch", *pitch)
            }
            Self::Dig
            | Self::Place { .. }
            | Self::Use
            | Self::SetObservationOptions { .. }
            | Self::Chat { .. } => Ok(()),
        }
    }
}

fn check_angle(field: &'static str, value: Option<f64>) -> Result<(), ActionError> {
    match value {
        Some(v) if !v.is_finite() => Err(ActionError::InvalidAngle { field, value: v }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    fn all_variants() -> Vec<Action> {
        vec![
            Action::move_at(Direction::Backward, 2.5),
            Action::rotate(Some(0.5), Some(-0.1)),
            Action::rotate(Some(0.5), None),
            Action::look_at(None, Some(1.2)),
            Action::Dig,
            Action::place("default:stone"),
            Action::Use,
            Action::set_observation_options(false),
            Action::chat("Hello from agent!"),
        ]
    }

    #[test]
    fn move_wire_format() {
        let value = serde_json::to_value(Action::forward()).unwrap();
        assert_eq!(
            value,
            json!({"type": "move", "direction": "forward", "speed": 1.0})
        );
    }

    #[test]
    fn rotate_omits_unset_fields() {
        let value = serde_json::to_value(Action::rotate(Some(0.5), None)).unwrap();
        assert_eq!(value, json!({"type": "rotate", "yaw_delta": 0.5}));
        assert!(value.get("pitch_delta").is_none());
    }

    #[test]
    fn look_at_with_nothing_set_is_bare() {
        let value = serde_json::to_value(Action::look_at(None, None)).unwrap();
        assert_eq!(value, json!({"type": "look_at"}));
    }

    #[test]
    fn unit_variants_carry_only_type() {
        assert_eq!(serde_json::to_value(Action::Dig).unwrap(), json!({"type": "dig"}));
        assert_eq!(serde_json::to_value(Action::Use).unwrap(), json!({"type": "use"}));
    }

    #[test]
    fn observation_options_are_nested() {
        let value = serde_json::to_value(Action::set_observation_options(true)).unwrap();
        assert_eq!(value["type"], "set_observation_options");
        assert_eq!(value["options"]["filter_occluded_blocks"], true);
    }

    #[test]
    fn place_defaults_to_dirt() {
        let value = serde_json::to_value(Action::place_default()).unwrap();
        assert_eq!(value, json!({"type": "place", "node_name": "default:dirt"}));

        let parsed: Action = serde_json::from_value(json!({"type": "place"})).unwrap();
        assert_eq!(parsed, Action::place_default());
    }

    #[test]
    fn move_without_speed_uses_default() {
        let parsed: Action =
            serde_json::from_value(json!({"type": "move", "direction": "up"})).unwrap();
        assert_eq!(parsed, Action::movement(Direction::Up));
    }

    #[test]
    fn every_variant_round_trips() {
        for action in all_variants() {
            let text = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&text).unwrap();
            assert_eq!(back, action, "round trip changed {text}");
        }
    }

    #[test]
    fn kind_matches_wire_tag() {
        for action in all_variants() {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.kind());
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: Result<Action, _> = serde_json::from_value(json!({"type": "teleport"}));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_bad_speed() {
        assert!(Action::forward().validate().is_ok());
        assert_eq!(
            Action::move_at(Direction::Left, 0.0).validate(),
            Err(ActionError::InvalidSpeed(0.0))
        );
        assert!(Action::move_at(Direction::Left, -1.0).validate().is_err());
        assert!(Action::move_at(Direction::Left, f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_angles() {
        assert!(Action::rotate(Some(f64::INFINITY), None).validate().is_err());
        assert!(Action::look_at(Some(0.0), Some(f64::NAN)).validate().is_err());
        assert!(Action::look_at(None, None).validate().is_ok());
    }

    #[test]
    fn direction_names_match_serde() {
        for dir in [
            Direction::Forward,
            Direction::Backward,
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(serde_json::to_value(dir).unwrap(), json!(dir.as_str()));
        }
    }
}
