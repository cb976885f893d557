//! Events used for cross-plugin communication.
//!
//! The physics bridge translates engine collision reports into these
//! engine-agnostic events; gameplay plugins only ever read these. Tests can
//! inject them directly without running a physics step.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Group;

use crate::plates::{PlateId, PlateState};

/// Whether an overlap started or ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactPhase {
    Enter,
    Exit,
}

/// A shape entered or left a trigger volume.
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerEvent {
    /// The trigger (sensor) collider entity
    pub zone: Entity,
    /// The collider that entered or left the zone
    pub collider: Entity,
    /// Rigid body owning `collider` (the collider itself if unparented)
    pub body: Entity,
    /// Collision category memberships of `collider`
    pub category: Group,
    pub phase: ContactPhase,
}

impl TriggerEvent {
    pub fn enter(zone: Entity, collider: Entity, body: Entity, category: Group) -> Self {
        Self {
            zone,
            collider,
            body,
            category,
            phase: ContactPhase::Enter,
        }
    }

    pub fn exit(zone: Entity, collider: Entity, body: Entity, category: Group) -> Self {
        Self {
            zone,
            collider,
            body,
            category,
            phase: ContactPhase::Exit,
        }
    }
}

/// A solid contact started against a character's foot collider.
#[derive(Event, Debug, Clone, Copy)]
pub struct FootContact {
    /// Body owning the foot collider
    pub body: Entity,
    /// Category memberships of the surface that was touched
    pub category: Group,
    /// Contact normal pointing from the surface toward the foot
    pub normal: Vec2,
}

/// A plate's derived state changed after initialization.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateChanged {
    pub plate: PlateId,
    pub state: PlateState,
}

/// A door committed to opening. Sent exactly once per door.
#[derive(Event, Debug, Clone, Copy)]
pub struct DoorOpened {
    pub door: Entity,
}

/// A ladder committed to dropping. Sent exactly once per ladder.
#[derive(Event, Debug, Clone, Copy)]
pub struct LadderDropped {
    pub ladder: Entity,
}
