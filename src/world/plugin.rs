//! World plugin - actuator sliding, climb zones and climb velocity.

use bevy::prelude::*;

use super::door::slide_doors;
use super::ladder::{drive_climbers, handle_climb_zone_triggers, slide_ladders};
use crate::core::SimSet;
use crate::physics::route_collision_events;
use crate::player::apply_motion;

/// World plugin - drives doors and ladders from plate broadcasts.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app
            // Non-physics tweening
            .add_systems(Update, (slide_doors, slide_ladders).in_set(SimSet::Logic))

            // Climbing overrides whatever the controller assigned
            .add_systems(
                Update,
                drive_climbers.in_set(SimSet::Physics).after(apply_motion),
            )

            .add_systems(
                Update,
                handle_climb_zone_triggers
                    .in_set(SimSet::Callbacks)
                    .after(route_collision_events),
            );
    }
}
