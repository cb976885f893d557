//! Physics bridge plugin.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use super::bridge::route_collision_events;
use crate::core::SimSet;

/// Routes rapier collision reports into gameplay events.
///
/// The rapier plugin itself is added by the application; this plugin only
/// registers the event so headless apps without rapier still run.
pub struct PhysicsBridgePlugin;

impl Plugin for PhysicsBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollisionEvent>()
            .add_systems(Update, route_collision_events.in_set(SimSet::Callbacks));
    }
}
