//! Simulation state and per-tick phase ordering.
//!
//! States determine whether the simulation advances at all. The phase sets
//! fix the order of work inside one tick so that input, logic, velocity
//! assignment, collision callbacks and presentation never interleave.

use bevy::prelude::*;

/// Top-level simulation state.
///
/// - `Playing`: every gameplay phase runs each tick
/// - `Paused`: the world stays visible but no tick advances it
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active simulation
    #[default]
    Playing,
    /// Simulation suspended (Escape toggles)
    Paused,
}

/// Per-tick phases, chained in this exact order inside `Update`.
///
/// 1. `Input` samples raw key state into [`crate::player::PlayerInput`].
/// 2. `Logic` runs crouch/jump/climb state transitions and slides actuators.
/// 3. `Physics` assigns velocities and gravity scales.
/// 4. `Callbacks` delivers trigger and collision notifications.
/// 5. `Presentation` updates plate visuals and the camera.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Logic,
    Physics,
    Callbacks,
    Presentation,
}
