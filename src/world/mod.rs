//! World module - door and ladder actuators, room construction.

mod door;
mod ladder;
mod plugin;
mod room;
mod spawning;

pub use door::{slide_doors, Door, DoorConfig};
pub use ladder::{
    drive_climbers, handle_climb_zone_triggers, slide_ladders, ClimbZone, Ladder, LadderConfig,
    DEFAULT_GRAVITY_SCALE,
};
pub use plugin::WorldPlugin;
pub use room::{build_demo_room, setup_demo_room, DemoRoom, ROOM_HEIGHT, ROOM_WIDTH};
pub use spawning::{
    spawn_crate, spawn_door, spawn_ground, spawn_ladder, spawn_plate, Crate, RoomGeometry,
};
