//! The demo room, pausing and camera framing in a headless app.

mod common;

use bevy::prelude::*;
use common::{enter, press_key, release_key, tick, TestAppBuilder};
use coop_platformer::camera::RoomCamera;
use coop_platformer::core::{layers, GameState};
use coop_platformer::plates::{PlateNetwork, PlateState};
use coop_platformer::player::Player;
use coop_platformer::world::{setup_demo_room, DemoRoom, Door, Ladder};

fn demo_app() -> App {
    TestAppBuilder::new().with_startup(setup_demo_room).prime().build()
}

fn room(app: &App) -> DemoRoom {
    app.world().resource::<DemoRoom>().clone()
}

#[test]
fn demo_room_spawns_two_players_and_actuators() {
    let mut app = demo_app();
    let room = room(&app);

    assert_eq!(app.world().resource::<PlateNetwork>().len(), 5);
    let mut players = app.world_mut().query_filtered::<Entity, With<Player>>();
    assert_eq!(players.iter(app.world()).count(), 2);
    assert!(app.world().get::<Door>(room.door).is_some());
    assert!(app.world().get::<Ladder>(room.ladder).is_some());
}

#[test]
fn both_players_and_the_crate_open_the_door() {
    let mut app = demo_app();
    let room = room(&app);
    let [first, second] = room.players;

    enter(&mut app, room.door_plate_zones[0], first, first, layers::PLAYER_FOOT);
    enter(&mut app, room.door_plate_zones[1], second, second, layers::PLAYER_FOOT);
    assert!(!app.world().get::<Door>(room.door).expect("door").is_open());

    let crate_entity = room.crate_entity;
    enter(&mut app, room.door_plate_zones[2], crate_entity, crate_entity, layers::CRATE);
    let network = app.world().resource::<PlateNetwork>();
    assert_eq!(network.state(room.door_combined), Some(PlateState::Full));
    assert!(app.world().get::<Door>(room.door).expect("door").is_open());
}

#[test]
fn ladder_plate_drops_the_ladder() {
    let mut app = demo_app();
    let room = room(&app);
    let player = room.players[0];

    enter(&mut app, room.ladder_plate_zone, player, player, layers::PLAYER_FOOT);
    assert!(app.world().get::<Ladder>(room.ladder).expect("ladder").is_dropped());
}

#[test]
fn escape_pauses_and_freezes_actuators() {
    let mut app = demo_app();
    let room = room(&app);
    let player = room.players[0];
    enter(&mut app, room.ladder_plate_zone, player, player, layers::PLAYER_FOOT);
    tick(&mut app, 10);

    press_key(&mut app, KeyCode::Escape);
    app.update();
    release_key(&mut app, KeyCode::Escape);
    app.update();
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Paused);

    let frozen = app.world().get::<Transform>(room.ladder).expect("ladder").translation;
    tick(&mut app, 30);
    let still = app.world().get::<Transform>(room.ladder).expect("ladder").translation;
    assert_eq!(frozen, still);

    press_key(&mut app, KeyCode::Escape);
    app.update();
    release_key(&mut app, KeyCode::Escape);
    tick(&mut app, 2);
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Playing);
    let moving = app.world().get::<Transform>(room.ladder).expect("ladder").translation;
    assert!(moving.y < still.y);
}

#[test]
fn shared_camera_settles_on_the_players_room() {
    let mut app = demo_app();
    let [first, second] = room(&app).players;

    // Midpoint (25, 1) is nearest the room centred at (32, 0)
    app.world_mut().entity_mut(first).insert(Transform::from_xyz(20.0, 0.0, 0.0));
    app.world_mut().entity_mut(second).insert(Transform::from_xyz(30.0, 2.0, 0.0));
    let camera = app
        .world_mut()
        .spawn((RoomCamera::dual(first, second), Transform::default()))
        .id();

    tick(&mut app, 120);
    let pose = app.world().get::<Transform>(camera).expect("camera").translation;
    assert!((pose.x - 32.0).abs() < 1e-3, "camera x at {}", pose.x);
    assert!(pose.y.abs() < 1e-3, "camera y at {}", pose.y);
}

#[test]
fn camera_without_targets_holds_still() {
    let mut app = demo_app();
    let gone = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(gone);
    let camera = app
        .world_mut()
        .spawn((RoomCamera::split(gone), Transform::from_xyz(5.0, 5.0, 0.0)))
        .id();

    tick(&mut app, 10);
    let pose = app.world().get::<Transform>(camera).expect("camera").translation;
    assert_eq!(pose, Vec3::new(5.0, 5.0, 0.0));
}
