//! Plate components.

use bevy::prelude::*;

use super::network::PlateId;
use super::sensor::PlateState;

/// Attached to a plate's sensor collider. Links it to its network node.
#[derive(Component, Debug, Clone, Copy)]
pub struct PressurePlate {
    pub id: PlateId,
    /// Currently shown visual slot (Off / Partial / Full)
    pub visual_slot: usize,
}

impl PressurePlate {
    pub fn new(id: PlateId) -> Self {
        Self {
            id,
            visual_slot: PlateState::Off.visual_slot(),
        }
    }
}
