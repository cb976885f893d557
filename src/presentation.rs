//! Presentation - flat sprites for colliders and the shared room camera.
//!
//! Only built with the `render` feature. Nothing here feeds back into the
//! simulation.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy_rapier2d::prelude::*;

use crate::camera::RoomCamera;
use crate::core::{GameTunables, SimSet};
use crate::player::{FootCollider, TopCollider};
use crate::plates::{sync_plate_visuals, PressurePlate};
use crate::world::{setup_demo_room, ClimbZone, Crate, DemoRoom, Door, RoomGeometry};

/// Plate colours indexed by visual slot (Off, Partial, Full).
const PLATE_COLORS: [Color; 3] = [
    Color::srgb(0.45, 0.1, 0.1),
    Color::srgb(0.8, 0.6, 0.1),
    Color::srgb(0.2, 0.8, 0.3),
];

const GROUND_COLOR: Color = Color::srgb(0.3, 0.3, 0.35);
const DOOR_COLOR: Color = Color::srgb(0.5, 0.35, 0.2);
const LADDER_COLOR: Color = Color::srgba(0.7, 0.55, 0.3, 0.8);
const CRATE_COLOR: Color = Color::srgb(0.6, 0.45, 0.25);
const FEET_COLOR: Color = Color::srgb(0.2, 0.4, 0.8);
const BODY_COLOR: Color = Color::srgb(0.3, 0.6, 0.95);

/// Presentation plugin - sprites, plate colours and the camera.
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
            .add_plugins(RapierDebugRenderPlugin {
                enabled: false,
                ..default()
            })
            .add_systems(Startup, spawn_camera.after(setup_demo_room))
            .add_systems(
                Update,
                (attach_sprites, color_plates.after(sync_plate_visuals))
                    .in_set(SimSet::Presentation),
            );
    }
}

fn spawn_camera(
    mut commands: Commands,
    room: Option<Res<DemoRoom>>,
    tunables: Option<Res<GameTunables>>,
) {
    let camera = tunables.map(|t| t.camera.clone()).unwrap_or_default();
    let Some(room) = room else {
        warn!("No demo room, camera will not follow anyone");
        commands.spawn(Camera2d);
        return;
    };

    let [first, second] = room.players;
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: camera.room_height,
            },
            ..OrthographicProjection::default_2d()
        },
        RoomCamera::dual(first, second),
    ));
}

/// Give every newly spawned cuboid collider a flat sprite of its size.
#[allow(clippy::type_complexity)]
fn attach_sprites(
    mut commands: Commands,
    added: Query<
        (
            Entity,
            &Collider,
            Has<PressurePlate>,
            Has<Door>,
            Has<ClimbZone>,
            Has<Crate>,
            Has<FootCollider>,
            Has<TopCollider>,
            Has<RoomGeometry>,
        ),
        Added<Collider>,
    >,
) {
    for (entity, collider, plate, door, zone, prop, feet, top, geometry) in added.iter() {
        let Some(cuboid) = collider.as_cuboid() else {
            continue;
        };
        let color = if plate {
            PLATE_COLORS[0]
        } else if door {
            DOOR_COLOR
        } else if zone {
            LADDER_COLOR
        } else if prop {
            CRATE_COLOR
        } else if feet {
            FEET_COLOR
        } else if top {
            BODY_COLOR
        } else if geometry {
            GROUND_COLOR
        } else {
            continue;
        };
        commands
            .entity(entity)
            .insert(Sprite::from_color(color, cuboid.half_extents() * 2.0));
    }
}

fn color_plates(mut plates: Query<(&PressurePlate, &mut Sprite), Changed<PressurePlate>>) {
    for (plate, mut sprite) in plates.iter_mut() {
        sprite.color = PLATE_COLORS[plate.visual_slot.min(PLATE_COLORS.len() - 1)];
    }
}
