//! Physics module - the shape-query contract and the rapier event bridge.
//!
//! Gameplay code never talks to rapier directly: it asks a [`ShapeQuery`]
//! for overlaps and reads the engine-agnostic events from [`crate::core`].

mod bridge;
mod plugin;
mod query;

pub use bridge::route_collision_events;
pub use plugin::PhysicsBridgePlugin;
pub use query::{RapierShapeQuery, ShapeQuery};
