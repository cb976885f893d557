//! Player plugin - input, controller ticks and body motion.

use bevy::prelude::*;

use super::movement::*;
use crate::core::SimSet;
use crate::physics::route_collision_events;

/// Player plugin - runs every character through the phase order.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sample_player_input.in_set(SimSet::Input),
                update_controllers.in_set(SimSet::Logic),
                apply_motion.in_set(SimSet::Physics),
                (handle_player_triggers, handle_foot_contacts)
                    .in_set(SimSet::Callbacks)
                    .after(route_collision_events),
            ),
        );
    }
}
