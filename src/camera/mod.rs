//! Camera module - room-grid framing for split and shared views.

mod follow;
mod framing;
mod plugin;

pub use follow::{follow_players, CameraMode, RoomCamera};
pub use framing::{dual_target, split_target, CameraConfig, RoomGrid};
pub use plugin::CameraPlugin;
