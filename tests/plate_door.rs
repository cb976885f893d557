//! Plates driving a door through a combined plate, in a headless app.

mod common;

use bevy::prelude::*;
use common::{enter, exit, run_once, stand_in, tick, TestAppBuilder};
use coop_platformer::core::layers;
use coop_platformer::plates::{PlateId, PlateNetwork, PlateState, PressurePlate};
use coop_platformer::world::{spawn_door, spawn_plate, Door, DoorConfig};

struct Fixture {
    app: App,
    solo: [PlateId; 3],
    combined: PlateId,
    zones: [Entity; 3],
    door: Entity,
}

fn fixture() -> Fixture {
    let mut builder = PlateNetwork::builder();
    let solo = [
        builder.add_solo(layers::DEFAULT_PRESSING),
        builder.add_solo(layers::DEFAULT_PRESSING),
        builder.add_solo(layers::DEFAULT_PRESSING),
    ];
    let combined = builder.add_combined(solo);
    let network = builder.build().expect("valid network");

    let mut app = TestAppBuilder::new().prime().build();
    app.insert_resource(network);

    let (zones, door) = run_once(
        &mut app,
        move |mut commands: Commands, mut network: ResMut<PlateNetwork>| {
            let half = Vec2::new(0.75, 0.1);
            let zones = [
                spawn_plate(&mut commands, solo[0], Vec2::new(-3.0, 0.0), half),
                spawn_plate(&mut commands, solo[1], Vec2::ZERO, half),
                spawn_plate(&mut commands, solo[2], Vec2::new(3.0, 0.0), half),
            ];
            let door = spawn_door(
                &mut commands,
                &mut network,
                Vec2::new(8.0, 2.0),
                Vec2::new(0.5, 2.0),
                vec![combined],
                &DoorConfig::default(),
            )
            .expect("door binds to a known plate");
            (zones, door)
        },
    );

    Fixture {
        app,
        solo,
        combined,
        zones,
        door,
    }
}

fn door(app: &App, entity: Entity) -> (&Door, Vec3) {
    let world = app.world();
    let door = world.get::<Door>(entity).expect("door exists");
    let pose = world.get::<Transform>(entity).expect("door has a transform").translation;
    (door, pose)
}

#[test]
fn door_opens_only_when_every_plate_is_held() {
    let mut f = fixture();
    let weights: Vec<Entity> = (0..3).map(|_| stand_in(&mut f.app)).collect();

    enter(&mut f.app, f.zones[0], weights[0], weights[0], layers::PLAYER_FOOT);
    enter(&mut f.app, f.zones[1], weights[1], weights[1], layers::CRATE);
    {
        let network = f.app.world().resource::<PlateNetwork>();
        assert_eq!(network.state(f.combined), Some(PlateState::Partial));
    }
    assert!(!door(&f.app, f.door).0.is_open());

    enter(&mut f.app, f.zones[2], weights[2], weights[2], layers::PLAYER_FOOT);
    let network = f.app.world().resource::<PlateNetwork>();
    assert_eq!(network.state(f.combined), Some(PlateState::Full));
    assert!(f.solo.iter().all(|&id| network.state(id) == Some(PlateState::Full)));
    assert!(door(&f.app, f.door).0.is_open());
}

#[test]
fn opened_door_slides_up_and_stays_open() {
    let mut f = fixture();
    let weights: Vec<Entity> = (0..3).map(|_| stand_in(&mut f.app)).collect();
    for (zone, &weight) in f.zones.iter().zip(&weights) {
        enter(&mut f.app, *zone, weight, weight, layers::PLAYER_FOOT);
    }

    tick(&mut f.app, 30);
    let (_, halfway) = door(&f.app, f.door);
    assert!(halfway.y > 2.0 && halfway.y < 4.0, "door mid-slide at {halfway}");

    // Stepping off does not close it again
    exit(&mut f.app, f.zones[0], weights[0], weights[0], layers::PLAYER_FOOT);
    tick(&mut f.app, 120);
    let (door_state, pose) = door(&f.app, f.door);
    assert!(door_state.is_open());
    assert_eq!(pose, door_state.open_pose());
}

#[test]
fn unmasked_shapes_do_not_press() {
    let mut f = fixture();
    let body = stand_in(&mut f.app);
    enter(&mut f.app, f.zones[0], body, body, layers::PLAYER);

    let network = f.app.world().resource::<PlateNetwork>();
    assert_eq!(network.state(f.solo[0]), Some(PlateState::Off));
}

#[test]
fn plate_visuals_follow_broadcasts() {
    let mut f = fixture();
    let body = stand_in(&mut f.app);
    enter(&mut f.app, f.zones[1], body, body, layers::CRATE);
    let slot = |app: &App, zone: Entity| {
        app.world()
            .get::<PressurePlate>(zone)
            .map(|p| p.visual_slot)
    };
    assert_eq!(slot(&f.app, f.zones[1]), Some(PlateState::Full.visual_slot()));
    assert_eq!(slot(&f.app, f.zones[0]), Some(PlateState::Off.visual_slot()));

    exit(&mut f.app, f.zones[1], body, body, layers::CRATE);
    assert_eq!(slot(&f.app, f.zones[1]), Some(PlateState::Off.visual_slot()));
}

#[test]
fn two_occupants_keep_a_plate_down() {
    let mut f = fixture();
    let first = stand_in(&mut f.app);
    let second = stand_in(&mut f.app);
    enter(&mut f.app, f.zones[0], first, first, layers::PLAYER_FOOT);
    enter(&mut f.app, f.zones[0], second, second, layers::CRATE);
    exit(&mut f.app, f.zones[0], first, first, layers::PLAYER_FOOT);

    let network = f.app.world().resource::<PlateNetwork>();
    assert_eq!(network.state(f.solo[0]), Some(PlateState::Full));
}
