//! Entity spawning functions for room construction.
//!
//! Actuators subscribe to their plates here, at construction, so a door or
//! ladder can never exist without its bindings.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::door::{Door, DoorConfig};
use super::ladder::{ClimbZone, Ladder, LadderConfig};
use crate::core::layers;
use crate::plates::{NetworkError, PlateId, PlateNetwork, PressurePlate};

/// Marker for all room entities that should be cleaned up together.
#[derive(Component)]
pub struct RoomGeometry;

/// Marker for pushable props.
#[derive(Component)]
pub struct Crate;

/// Spawn a static block of ground.
pub fn spawn_ground(commands: &mut Commands, center: Vec2, half_extents: Vec2) -> Entity {
    commands
        .spawn((
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            CollisionGroups::new(layers::GROUND, Group::ALL),
            RoomGeometry,
        ))
        .id()
}

/// Spawn a pushable crate that can hold plates down.
pub fn spawn_crate(commands: &mut Commands, center: Vec2, half_extents: Vec2) -> Entity {
    commands
        .spawn((
            Crate,
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Dynamic,
            Collider::cuboid(half_extents.x, half_extents.y),
            CollisionGroups::new(layers::CRATE, Group::ALL),
            LockedAxes::ROTATION_LOCKED,
            RoomGeometry,
        ))
        .id()
}

/// Spawn the trigger volume of an already declared plate.
pub fn spawn_plate(
    commands: &mut Commands,
    plate: PlateId,
    center: Vec2,
    half_extents: Vec2,
) -> Entity {
    commands
        .spawn((
            PressurePlate::new(plate),
            Transform::from_translation(center.extend(0.0)),
            Collider::cuboid(half_extents.x, half_extents.y),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            CollisionGroups::new(layers::PLATE, Group::ALL),
            RoomGeometry,
        ))
        .id()
}

/// Spawn a door bound to `plates` and subscribe it to each of them.
pub fn spawn_door(
    commands: &mut Commands,
    network: &mut PlateNetwork,
    closed_pose: Vec2,
    half_extents: Vec2,
    plates: Vec<PlateId>,
    config: &DoorConfig,
) -> Result<Entity, NetworkError> {
    ensure_known(network, &plates)?;

    let door = Door::new(closed_pose.extend(0.0), plates.clone(), config);
    let entity = commands
        .spawn((
            door,
            Transform::from_translation(closed_pose.extend(0.0)),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(half_extents.x, half_extents.y),
            CollisionGroups::new(layers::GROUND, Group::ALL),
            RoomGeometry,
        ))
        .id();

    let bound = plates.len();
    for plate in plates {
        network.subscribe(plate, entity)?;
    }

    info!("Spawned door {:?} at {} bound to {} plate(s)", entity, closed_pose, bound);
    Ok(entity)
}

/// Spawn a hidden drop ladder bound to `plate`, with its climb zone.
pub fn spawn_ladder(
    commands: &mut Commands,
    network: &mut PlateNetwork,
    hidden_pose: Vec2,
    plate: PlateId,
    config: &LadderConfig,
) -> Result<Entity, NetworkError> {
    ensure_known(network, &[plate])?;

    let ladder = Ladder::new(hidden_pose.extend(0.0), plate, config);
    let half_width = config.width / 2.0;
    let half_height = config.height / 2.0;

    let entity = commands
        .spawn((
            ladder,
            Transform::from_translation(hidden_pose.extend(0.0)),
            RigidBody::KinematicPositionBased,
            GravityScale(0.0),
            RoomGeometry,
        ))
        .id();

    // Zone is centred on the ladder and matches its size
    commands.entity(entity).with_children(|parent| {
        parent.spawn((
            ClimbZone { ladder: entity },
            Transform::default(),
            Collider::cuboid(half_width, half_height),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            CollisionGroups::new(layers::LADDER, Group::ALL),
        ));
    });

    network.subscribe(plate, entity)?;

    info!("Spawned ladder {:?} at {} bound to plate {}", entity, hidden_pose, plate);
    Ok(entity)
}

fn ensure_known(network: &PlateNetwork, plates: &[PlateId]) -> Result<(), NetworkError> {
    match plates.iter().find(|&&id| network.get(id).is_none()) {
        Some(&missing) => Err(NetworkError::UnknownPlate(missing)),
        None => Ok(()),
    }
}
