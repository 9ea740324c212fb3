//! Shared wire types for the Luanti agent bridge.
//!
//! This crate is the single source of truth for every payload that crosses
//! the bridge: the commands a controller pushes to the game host, and the
//! world snapshots the host reports back.
//!
//! # Modules
//!
//! - [`actions`] -- The closed set of agent actions and their JSON form
//! - [`observation`] -- Read-only world snapshot structures
//! - [`command`] -- The queue envelope: a known [`Action`] or an opaque
//!   JSON payload passed through untouched

pub mod actions;
pub mod command;
pub mod observation;

// Re-export all public types at crate root for convenience.
pub use actions::{Action, ActionError, DEFAULT_NODE_NAME, DEFAULT_SPEED, Direction, ObservationOptions};
pub use command::Command;
pub use observation::{
    Block, Entity, LookTarget, Observation, Orientation, Position, TargetType, UNKNOWN_ENTITY_TYPE,
};
