//! Co-op Platformer - Entry Point
//!
//! Controls:
//! - Player 1: A/D move, S crouch / climb down, W jump / climb up
//! - Player 2: Arrow keys, same layout
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use coop_platformer::presentation::PresentationPlugin;
use coop_platformer::world::setup_demo_room;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Co-op Platformer".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, in world units
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))

        // Our game plugin
        .add_plugins(coop_platformer::CoopPlatformerPlugin)
        .add_plugins(PresentationPlugin)

        .add_systems(Startup, setup_demo_room)

        .run();
}
