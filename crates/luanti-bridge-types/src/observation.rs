//! World snapshots reported by the game host.
//!
//! Deserialization is strict: every field not explicitly documented as
//! optional must be present, or the whole [`Observation`] fails to parse. A
//! half-filled snapshot is worse than none, so no field silently defaults.
//! Collections may be empty but never absent.
//!
//! The two exceptions mirror what the host actually sends:
//!
//! - an entity without a `type` key is reported as [`UNKNOWN_ENTITY_TYPE`]
//! - a `look_target` that is absent, `null`, or `{}` means nothing is targeted

use serde::{Deserialize, Deserializer, Serialize};

/// Entity type reported when the host omits one.
pub const UNKNOWN_ENTITY_TYPE: &str = "unknown";

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// East-west axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// North-south axis.
    pub z: f64,
}

/// Where the agent is facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Horizontal angle in radians.
    pub yaw: f64,
    /// Vertical angle in radians.
    pub pitch: f64,
    /// Unit look vector.
    pub look_dir: Position,
}

/// A single node near the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Node position.
    pub pos: Position,
    /// Registered node name, e.g. `default:stone`.
    pub name: String,
    /// Light / engine parameter.
    pub param1: u8,
    /// Facing / variant parameter.
    pub param2: u8,
}

/// An object or player near the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity position.
    pub pos: Position,
    /// Distance from the agent.
    pub distance: f64,
    /// Entity name.
    pub name: String,
    /// Entity kind as reported by the host (wire key `type`).
    #[serde(rename = "type", default = "unknown_entity_type")]
    pub entity_type: String,
    /// Player name, for player entities only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

fn unknown_entity_type() -> String {
    UNKNOWN_ENTITY_TYPE.to_owned()
}

/// Kind of thing under the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// A world node.
    Node,
    /// An entity.
    Object,
}

/// What the agent is currently looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookTarget {
    /// Node or object (wire key `type`).
    #[serde(rename = "type")]
    pub target_type: TargetType,
    /// Distance to the target.
    pub distance: f64,
    /// Target position, when the host reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Position>,
    /// Target name, when the host reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A complete snapshot of what the controlled agent perceives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Agent position.
    pub position: Position,
    /// Agent facing.
    pub orientation: Orientation,
    /// Nearby nodes, in host order.
    pub surrounding_blocks: Vec<Block>,
    /// Nearby entities, in host order.
    pub nearby_entities: Vec<Entity>,
    /// Current look target, if any.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub look_target: Option<LookTarget>,
    /// Agent health points.
    pub health: i32,
    /// Free-form agent state label reported by the host.
    pub state: String,
}

impl Observation {
    /// Parse an observation from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Treat `null` and `{}` the same as an absent look target.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<LookTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
