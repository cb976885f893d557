//! Drop ladder actuator and its climb zone.
//!
//! The ladder hangs hidden until its plate reports fully on, then slides
//! down once. Players whose feet are inside the climb zone lose gravity and
//! climb at a fixed speed with their up/down keys.

use bevy::prelude::*;
use bevy_rapier2d::prelude::{GravityScale, Velocity};
use serde::Deserialize;

use crate::core::{layers, move_towards, ContactPhase, TriggerEvent};
use crate::plates::{PlateId, PlateState};
use crate::player::{Player, PlayerInput};

/// Gravity scale a climber gets back when leaving the zone.
///
/// This is a fixed value, not the climber's own cached scale.
pub const DEFAULT_GRAVITY_SCALE: f32 = 1.0;

/// Ladder tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// How far the ladder drops from its hidden pose
    pub drop_distance: f32,
    /// Slide speed in units per second
    pub slide_speed: f32,
    /// Height of the ladder and its climb zone
    pub height: f32,
    /// Width of the ladder and its climb zone
    pub width: f32,
    /// Vertical speed while climbing
    pub climb_speed: f32,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            drop_distance: 8.0,
            slide_speed: 2.0,
            height: 8.0,
            width: 1.0,
            climb_speed: 3.0,
        }
    }
}

impl LadderConfig {
    pub fn sanitized(self) -> Self {
        Self {
            drop_distance: if self.drop_distance.is_finite() { self.drop_distance } else { 0.0 },
            slide_speed: self.slide_speed.max(0.0),
            height: self.height.max(0.0),
            width: self.width.max(0.0),
            climb_speed: self.climb_speed.max(0.0),
        }
    }
}

/// Marks a ladder's climb trigger volume.
#[derive(Component, Debug, Clone, Copy)]
pub struct ClimbZone {
    pub ladder: Entity,
}

/// A drop ladder bound to a single plate.
#[derive(Component, Debug, Clone)]
pub struct Ladder {
    plate: PlateId,
    hidden_pose: Vec3,
    rest_pose: Vec3,
    target_pose: Vec3,
    dropped: bool,
    slide_speed: f32,
    climb_speed: f32,
    climbers: Vec<Entity>,
}

impl Ladder {
    pub fn new(hidden_pose: Vec3, plate: PlateId, config: &LadderConfig) -> Self {
        Self {
            plate,
            hidden_pose,
            rest_pose: hidden_pose - Vec3::Y * config.drop_distance,
            target_pose: hidden_pose,
            dropped: false,
            slide_speed: config.slide_speed,
            climb_speed: config.climb_speed,
            climbers: Vec::new(),
        }
    }

    pub fn plate(&self) -> PlateId {
        self.plate
    }

    pub fn hidden_pose(&self) -> Vec3 {
        self.hidden_pose
    }

    pub fn rest_pose(&self) -> Vec3 {
        self.rest_pose
    }

    pub fn target_pose(&self) -> Vec3 {
        self.target_pose
    }

    pub fn is_dropped(&self) -> bool {
        self.dropped
    }

    pub fn climbers(&self) -> &[Entity] {
        &self.climbers
    }

    /// React to a broadcast from the bound plate.
    ///
    /// Returns true only on the broadcast that drops the ladder.
    pub fn on_plate_changed(&mut self, state: PlateState) -> bool {
        if self.dropped || !state.is_full() {
            return false;
        }
        self.dropped = true;
        self.target_pose = self.rest_pose;
        true
    }

    /// Pose after `dt` seconds of sliding from `current`.
    pub fn step(&self, current: Vec3, dt: f32) -> Vec3 {
        move_towards(current, self.target_pose, self.slide_speed * dt)
    }

    /// Start tracking a climber. Ignored until dropped and for duplicates.
    pub fn add_climber(&mut self, entity: Entity) -> bool {
        if !self.dropped || self.climbers.contains(&entity) {
            return false;
        }
        self.climbers.push(entity);
        true
    }

    /// Stop tracking a climber. Returns false if it was not climbing.
    pub fn remove_climber(&mut self, entity: Entity) -> bool {
        let Some(index) = self.climbers.iter().position(|&e| e == entity) else {
            return false;
        };
        self.climbers.remove(index);
        true
    }

    /// Vertical velocity for a climber holding `up` and/or `down`. Up wins.
    pub fn climb_velocity(&self, up: bool, down: bool) -> f32 {
        if up {
            self.climb_speed
        } else if down {
            -self.climb_speed
        } else {
            0.0
        }
    }
}

/// Slide ladders toward their target pose.
pub fn slide_ladders(time: Res<Time>, mut ladders: Query<(&Ladder, &mut Transform)>) {
    let dt = time.delta_secs();
    for (ladder, mut transform) in ladders.iter_mut() {
        if transform.translation != ladder.target_pose() {
            transform.translation = ladder.step(transform.translation, dt);
        }
    }
}

/// Track players entering and leaving climb zones.
///
/// Only a player's foot collider counts, so each player produces a single
/// enter/exit pair per zone.
pub fn handle_climb_zone_triggers(
    mut triggers: EventReader<TriggerEvent>,
    zones: Query<&ClimbZone>,
    mut ladders: Query<&mut Ladder>,
    players: Query<(), With<Player>>,
    mut gravity: Query<&mut GravityScale>,
) {
    for trigger in triggers.read() {
        let Ok(zone) = zones.get(trigger.zone) else {
            continue;
        };
        if !trigger.category.intersects(layers::PLAYER_FOOT) || players.get(trigger.body).is_err() {
            continue;
        }
        let Ok(mut ladder) = ladders.get_mut(zone.ladder) else {
            warn!("Climb zone {:?} points at missing ladder {:?}", trigger.zone, zone.ladder);
            continue;
        };

        match trigger.phase {
            ContactPhase::Enter => {
                if ladder.add_climber(trigger.body) {
                    if let Ok(mut scale) = gravity.get_mut(trigger.body) {
                        scale.0 = 0.0;
                    }
                    debug!("{:?} started climbing {:?}", trigger.body, zone.ladder);
                }
            }
            ContactPhase::Exit => {
                if let Ok(mut scale) = gravity.get_mut(trigger.body) {
                    scale.0 = DEFAULT_GRAVITY_SCALE;
                }
                if ladder.remove_climber(trigger.body) {
                    debug!("{:?} stopped climbing {:?}", trigger.body, zone.ladder);
                }
            }
        }
    }
}

/// Override climbers' vertical velocity from their up/down intent.
///
/// Horizontal velocity is left untouched.
pub fn drive_climbers(ladders: Query<&Ladder>, mut climbers: Query<(&PlayerInput, &mut Velocity)>) {
    for ladder in ladders.iter().filter(|ladder| ladder.is_dropped()) {
        for &climber in ladder.climbers() {
            let Ok((input, mut velocity)) = climbers.get_mut(climber) else {
                continue;
            };
            velocity.linvel.y = ladder.climb_velocity(input.up(), input.down());
        }
    }
}
