//! Camera plugin.

use bevy::prelude::*;

use super::follow::follow_players;
use crate::core::SimSet;

/// Camera plugin - room framing in the presentation phase.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_players.in_set(SimSet::Presentation));
    }
}
