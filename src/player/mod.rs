//! Player module - input, the platformer controller and the player body.

mod components;
mod controller;
mod movement;
mod plugin;

pub use components::*;
pub use controller::{launch_velocity, PlayerController};
pub use movement::{
    apply_motion, handle_foot_contacts, handle_player_triggers, sample_player_input, spawn_player,
    update_controllers, FALLBACK_GRAVITY_Y,
};
pub use plugin::PlayerPlugin;
