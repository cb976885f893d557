//! Co-op Platformer - a two-player puzzle platformer in Bevy.
//!
//! Two players cooperate to hold pressure plates down, open doors and drop
//! ladders, using a crouch/jump/climb character controller.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Simulation state, phase ordering, events, tunables
//! - **Physics**: Shape queries and collision event routing for rapier
//! - **Plates**: Pressure plate sensors and their combination network
//! - **World**: Door and ladder actuators, room construction
//! - **Player**: Input sampling and the platformer controller
//! - **Camera**: Room-grid framing for split and shared views
//!
//! Every gameplay system runs in one of the [`core::SimSet`] phases, in the
//! order input, logic, physics, callbacks, presentation.

pub mod camera;
pub mod core;
pub mod physics;
pub mod plates;
pub mod player;
pub mod world;

#[cfg(feature = "render")]
pub mod presentation;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// The rapier physics plugin is left to the application so headless
/// setups can run without it.
pub struct CoopPlatformerPlugin;

impl Plugin for CoopPlatformerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Collision routing
            .add_plugins(physics::PhysicsBridgePlugin)

            // Plate network
            .add_plugins(plates::PlatesPlugin)

            // Doors and ladders
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Camera follow
            .add_plugins(camera::CameraPlugin);
    }
}
