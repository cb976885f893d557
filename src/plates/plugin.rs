//! Plates plugin - sensor network resource and trigger handling.

use bevy::prelude::*;

use super::network::PlateNetwork;
use super::systems::{handle_plate_triggers, sync_plate_visuals};
use crate::core::SimSet;
use crate::physics::route_collision_events;

/// Plates plugin - counts presses and propagates plate state to actuators.
pub struct PlatesPlugin;

impl Plugin for PlatesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlateNetwork>()
            .add_systems(
                Update,
                handle_plate_triggers
                    .in_set(SimSet::Callbacks)
                    .after(route_collision_events),
            )
            .add_systems(Update, sync_plate_visuals.in_set(SimSet::Presentation));
    }
}
