//! Door actuator: opens once every bound plate is fully on.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::move_towards;
use crate::plates::{PlateId, PlateNetwork};

/// Door tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// How far the door slides up when opening
    pub open_height: f32,
    /// Slide speed in units per second
    pub slide_speed: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            open_height: 2.0,
            slide_speed: 2.0,
        }
    }
}

impl DoorConfig {
    pub fn sanitized(self) -> Self {
        Self {
            open_height: if self.open_height.is_finite() { self.open_height } else { 0.0 },
            slide_speed: self.slide_speed.max(0.0),
        }
    }
}

/// A sliding door bound to one or more plates.
///
/// Opening is terminal: once `opened` is set nothing closes it again.
#[derive(Component, Debug, Clone)]
pub struct Door {
    plates: Vec<PlateId>,
    closed_pose: Vec3,
    open_pose: Vec3,
    opened: bool,
    slide_speed: f32,
}

impl Door {
    pub fn new(closed_pose: Vec3, plates: Vec<PlateId>, config: &DoorConfig) -> Self {
        Self {
            plates,
            closed_pose,
            open_pose: closed_pose + Vec3::Y * config.open_height,
            opened: false,
            slide_speed: config.slide_speed,
        }
    }

    pub fn plates(&self) -> &[PlateId] {
        &self.plates
    }

    pub fn closed_pose(&self) -> Vec3 {
        self.closed_pose
    }

    pub fn open_pose(&self) -> Vec3 {
        self.open_pose
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// React to a broadcast from any bound plate.
    ///
    /// Returns true only on the call that opens the door. A single plate
    /// that is not fully on vetoes. A door with no plates never opens.
    pub fn on_plate_changed(&mut self, network: &PlateNetwork) -> bool {
        if self.opened || self.plates.is_empty() {
            return false;
        }
        if !network.all_full(&self.plates) {
            return false;
        }
        self.opened = true;
        true
    }

    /// Pose after `dt` seconds of sliding from `current`.
    pub fn step(&self, current: Vec3, dt: f32) -> Vec3 {
        if !self.opened {
            return current;
        }
        move_towards(current, self.open_pose, self.slide_speed * dt)
    }
}

/// Slide open doors toward their open pose.
pub fn slide_doors(time: Res<Time>, mut doors: Query<(&Door, &mut Transform)>) {
    let dt = time.delta_secs();
    for (door, mut transform) in doors.iter_mut() {
        if door.is_open() && transform.translation != door.open_pose() {
            transform.translation = door.step(transform.translation, dt);
        }
    }
}
