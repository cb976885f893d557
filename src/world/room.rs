//! The demo room: three plates opening a door, one plate dropping a ladder.

use bevy::prelude::*;

use super::spawning::{spawn_crate, spawn_door, spawn_ground, spawn_ladder, spawn_plate};
use crate::core::{layers, GameTunables};
use crate::plates::{NetworkError, PlateId, PlateNetwork};
use crate::player::{spawn_player, KeyBindings};

/// Room width in world units, matching the camera's room grid.
pub const ROOM_WIDTH: f32 = 32.0;
/// Room height in world units.
pub const ROOM_HEIGHT: f32 = 18.0;

const FLOOR_TOP: f32 = -ROOM_HEIGHT / 2.0 + 1.0;
const PLATE_HALF: Vec2 = Vec2::new(0.75, 0.1);

/// Handles to everything the demo room spawned.
#[derive(Resource, Debug, Clone)]
pub struct DemoRoom {
    pub players: [Entity; 2],
    pub door: Entity,
    pub ladder: Entity,
    pub crate_entity: Entity,
    /// The three solo plates that together open the door
    pub door_plates: [PlateId; 3],
    /// Combined plate the door listens to
    pub door_combined: PlateId,
    pub ladder_plate: PlateId,
    /// Trigger volume entities, indexed like `door_plates`
    pub door_plate_zones: [Entity; 3],
    pub ladder_plate_zone: Entity,
}

/// Declare the room's plate network and spawn its entities.
pub fn build_demo_room(
    commands: &mut Commands,
    tunables: &GameTunables,
) -> Result<(DemoRoom, PlateNetwork), NetworkError> {
    let mut builder = PlateNetwork::builder();
    let door_plates = [
        builder.add_solo(layers::DEFAULT_PRESSING),
        builder.add_solo(layers::DEFAULT_PRESSING),
        builder.add_solo(layers::DEFAULT_PRESSING),
    ];
    let door_combined = builder.add_combined(door_plates);
    let ladder_plate = builder.add_solo(layers::DEFAULT_PRESSING);
    let mut network = builder.build()?;

    let half_w = ROOM_WIDTH / 2.0;
    let half_h = ROOM_HEIGHT / 2.0;

    // Shell: floor, walls, ceiling and the ledge the ladder leads to
    spawn_ground(commands, Vec2::new(0.0, -half_h + 0.5), Vec2::new(half_w, 0.5));
    spawn_ground(commands, Vec2::new(0.0, half_h - 0.5), Vec2::new(half_w, 0.5));
    spawn_ground(commands, Vec2::new(-half_w + 0.5, 0.0), Vec2::new(0.5, half_h));
    spawn_ground(commands, Vec2::new(half_w - 0.5, 0.0), Vec2::new(0.5, half_h));
    spawn_ground(commands, Vec2::new(-11.0, 0.5), Vec2::new(4.0, 0.5));

    let plate_y = FLOOR_TOP + PLATE_HALF.y;
    let door_plate_zones = [
        spawn_plate(commands, door_plates[0], Vec2::new(-4.0, plate_y), PLATE_HALF),
        spawn_plate(commands, door_plates[1], Vec2::new(-1.0, plate_y), PLATE_HALF),
        spawn_plate(commands, door_plates[2], Vec2::new(2.0, plate_y), PLATE_HALF),
    ];
    let ladder_plate_zone =
        spawn_plate(commands, ladder_plate, Vec2::new(8.0, plate_y), PLATE_HALF);

    let door_half = Vec2::new(0.5, 2.0);
    let door = spawn_door(
        commands,
        &mut network,
        Vec2::new(12.0, FLOOR_TOP + door_half.y),
        door_half,
        vec![door_combined],
        &tunables.door,
    )?;

    // Hung so that after the drop it stands on the floor
    let ladder_config = &tunables.ladder;
    let rest_y = FLOOR_TOP + ladder_config.height / 2.0;
    let ladder = spawn_ladder(
        commands,
        &mut network,
        Vec2::new(-6.5, rest_y + ladder_config.drop_distance),
        ladder_plate,
        ladder_config,
    )?;

    let crate_half = Vec2::splat(0.5);
    let crate_entity = spawn_crate(commands, Vec2::new(5.0, FLOOR_TOP + crate_half.y), crate_half);

    let player_y = FLOOR_TOP + tunables.player.foot_half_extents.1 - tunables.player.foot_offset.1;
    let players = [
        spawn_player(commands, Vec2::new(-13.0, player_y), KeyBindings::wasd(), &tunables.player),
        spawn_player(commands, Vec2::new(-10.0, player_y), KeyBindings::arrows(), &tunables.player),
    ];

    let room = DemoRoom {
        players,
        door,
        ladder,
        crate_entity,
        door_plates,
        door_combined,
        ladder_plate,
        door_plate_zones,
        ladder_plate_zone,
    };
    Ok((room, network))
}

/// Startup system that builds the demo room and installs its network.
pub fn setup_demo_room(mut commands: Commands, tunables: Option<Res<GameTunables>>) {
    let tunables = tunables.map(|t| GameTunables::clone(&t)).unwrap_or_default();
    match build_demo_room(&mut commands, &tunables) {
        Ok((room, network)) => {
            info!("Demo room ready with {} plates", network.len());
            commands.insert_resource(network);
            commands.insert_resource(room);
        }
        Err(e) => error!("Failed to build demo room: {}", e),
    }
}
