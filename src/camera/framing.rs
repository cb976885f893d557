//! Room-grid framing math.
//!
//! The world is tiled by rooms of a fixed size centred on multiples of that
//! size. The camera frames whichever room the tracked point is closest to.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::floor_duration;

/// Camera tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Room width in world units
    pub room_width: f32,
    /// Room height in world units (the camera shows exactly one room high)
    pub room_height: f32,
    /// Seconds to settle on a new target
    pub smooth_time: f32,
    /// Viewport width over height
    pub aspect: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            room_width: 32.0,
            room_height: 18.0,
            smooth_time: 0.1,
            aspect: 16.0 / 9.0,
        }
    }
}

impl CameraConfig {
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            room_width: positive(self.room_width, defaults.room_width),
            room_height: positive(self.room_height, defaults.room_height),
            smooth_time: floor_duration(self.smooth_time),
            aspect: positive(self.aspect, defaults.aspect),
        }
    }

    pub fn grid(&self) -> RoomGrid {
        RoomGrid::new(self.room_width, self.room_height)
    }

    /// Half the visible area for an orthographic view one room high.
    pub fn half_view(&self) -> Vec2 {
        let half_height = self.room_height * 0.5;
        Vec2::new(half_height * self.aspect, half_height)
    }
}

/// Grid of equally sized rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomGrid {
    pub room_size: Vec2,
}

impl RoomGrid {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            room_size: Vec2::new(width, height),
        }
    }

    /// Index of the room whose centre is nearest to `point`.
    ///
    /// Exact halfway points round to the even index.
    pub fn room_index(&self, point: Vec2) -> IVec2 {
        let cell = point / self.room_size;
        IVec2::new(cell.x.round_ties_even() as i32, cell.y.round_ties_even() as i32)
    }

    /// Centre of the room containing `point`.
    pub fn room_center(&self, point: Vec2) -> Vec2 {
        self.room_index(point).as_vec2() * self.room_size
    }
}

/// Single-player framing.
///
/// Horizontal follows the player, clamped so the view never leaves the
/// current room. Vertical is locked to the room centre.
pub fn split_target(grid: &RoomGrid, half_view: Vec2, player: Vec2) -> Vec2 {
    let center = grid.room_center(player);
    let min_x = center.x - grid.room_size.x * 0.5 + half_view.x;
    let max_x = center.x + grid.room_size.x * 0.5 - half_view.x;
    // A view wider than the room just sits on the centre
    let x = if min_x <= max_x {
        player.x.clamp(min_x, max_x)
    } else {
        center.x
    };
    Vec2::new(x, center.y)
}

/// Shared framing: the centre of the room nearest to the players' midpoint.
pub fn dual_target(grid: &RoomGrid, first: Vec2, second: Vec2) -> Vec2 {
    grid.room_center((first + second) * 0.5)
}
