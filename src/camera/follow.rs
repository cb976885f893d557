//! Camera follow component and system.

use bevy::prelude::*;

use super::framing::{dual_target, split_target};
use crate::core::{smooth_damp, GameTunables};

/// What a [`RoomCamera`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// One camera per player, clamped inside the player's room
    Split(Entity),
    /// One shared camera on the room around both players
    Dual(Entity, Entity),
}

/// A camera that frames rooms around its tracked players.
#[derive(Component, Debug, Clone)]
pub struct RoomCamera {
    pub mode: CameraMode,
    velocity: Vec2,
}

impl RoomCamera {
    pub fn split(player: Entity) -> Self {
        Self {
            mode: CameraMode::Split(player),
            velocity: Vec2::ZERO,
        }
    }

    pub fn dual(first: Entity, second: Entity) -> Self {
        Self {
            mode: CameraMode::Dual(first, second),
            velocity: Vec2::ZERO,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Ease every room camera toward its framing target.
///
/// A camera whose tracked players are missing holds still for the tick.
pub fn follow_players(
    time: Res<Time>,
    tunables: Option<Res<GameTunables>>,
    targets: Query<&GlobalTransform, Without<RoomCamera>>,
    mut cameras: Query<(&mut RoomCamera, &mut Transform)>,
) {
    let config = tunables.map(|t| t.camera.clone()).unwrap_or_default();
    let grid = config.grid();
    let position = |entity: Entity| targets.get(entity).ok().map(|t| t.translation().truncate());

    for (mut camera, mut transform) in cameras.iter_mut() {
        let target = match camera.mode {
            CameraMode::Split(player) => {
                position(player).map(|p| split_target(&grid, config.half_view(), p))
            }
            CameraMode::Dual(first, second) => position(first)
                .zip(position(second))
                .map(|(a, b)| dual_target(&grid, a, b)),
        };
        let Some(target) = target else {
            continue;
        };

        let current = transform.translation.truncate();
        let next = smooth_damp(
            current,
            target,
            &mut camera.velocity,
            config.smooth_time,
            time.delta_secs(),
        );
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
