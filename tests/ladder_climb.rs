//! Drop ladder and climbing, in a headless app.

mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::{GravityScale, Velocity};
use common::{enter, exit, press_key, release_key, run_once, stand_in, TestAppBuilder};
use coop_platformer::core::layers;
use coop_platformer::plates::{PlateId, PlateNetwork};
use coop_platformer::player::{
    KeyBindings, MotionIntent, Player, PlayerConfig, PlayerController, PlayerInput,
};
use coop_platformer::world::{
    spawn_ladder, spawn_plate, ClimbZone, Ladder, LadderConfig, DEFAULT_GRAVITY_SCALE,
};

struct Fixture {
    app: App,
    plate_zone: Entity,
    ladder: Entity,
    climb_zone: Entity,
    player: Entity,
    feet: Entity,
}

fn fixture() -> Fixture {
    let mut builder = PlateNetwork::builder();
    let plate: PlateId = builder.add_solo(layers::DEFAULT_PRESSING);
    let network = builder.build().expect("valid network");

    let mut app = TestAppBuilder::new().prime().build();
    app.insert_resource(network);

    let (plate_zone, ladder) = run_once(
        &mut app,
        move |mut commands: Commands, mut network: ResMut<PlateNetwork>| {
            let half = Vec2::new(0.75, 0.1);
            let zone = spawn_plate(&mut commands, plate, Vec2::new(-4.0, 0.0), half);
            let ladder = spawn_ladder(
                &mut commands,
                &mut network,
                Vec2::new(0.0, 12.0),
                plate,
                &LadderConfig::default(),
            )
            .expect("ladder binds to a known plate");
            (zone, ladder)
        },
    );

    let climb_zone = {
        let world = app.world_mut();
        let mut zones = world.query::<(Entity, &ClimbZone)>();
        zones
            .iter(world)
            .find(|(_, zone)| zone.ladder == ladder)
            .map(|(entity, _)| entity)
            .expect("ladder spawns a climb zone")
    };

    let player = app
        .world_mut()
        .spawn((
            Player,
            PlayerController::new(PlayerConfig::default(), 1.0),
            PlayerInput::default(),
            MotionIntent::default(),
            KeyBindings::wasd(),
            Transform::default(),
            Velocity::zero(),
            GravityScale(1.0),
        ))
        .id();
    let feet = stand_in(&mut app);

    Fixture {
        app,
        plate_zone,
        ladder,
        climb_zone,
        player,
        feet,
    }
}

impl Fixture {
    fn ladder(&self) -> &Ladder {
        self.app.world().get::<Ladder>(self.ladder).expect("ladder exists")
    }

    fn controller(&self) -> &PlayerController {
        self.app
            .world()
            .get::<PlayerController>(self.player)
            .expect("player has a controller")
    }

    fn gravity(&self) -> f32 {
        self.app.world().get::<GravityScale>(self.player).expect("gravity").0
    }

    fn velocity(&self) -> Vec2 {
        self.app.world().get::<Velocity>(self.player).expect("velocity").linvel
    }

    fn drop_ladder(&mut self) {
        let weight = stand_in(&mut self.app);
        enter(&mut self.app, self.plate_zone, weight, weight, layers::CRATE);
    }

    fn step_into_zone(&mut self) {
        enter(&mut self.app, self.climb_zone, self.feet, self.player, layers::PLAYER_FOOT);
    }
}

#[test]
fn hidden_ladder_cannot_be_climbed() {
    let mut f = fixture();
    f.step_into_zone();
    assert!(f.ladder().climbers().is_empty());
    assert!(!f.controller().is_climbing());
    assert_eq!(f.gravity(), 1.0);
}

#[test]
fn full_plate_drops_ladder_to_rest() {
    let mut f = fixture();
    f.drop_ladder();
    assert!(f.ladder().is_dropped());

    common::tick(&mut f.app, 400);
    let rest = f.ladder().rest_pose();
    let pose = f.app.world().get::<Transform>(f.ladder).expect("transform").translation;
    assert_eq!(pose, rest);
    assert_eq!(rest, Vec3::new(0.0, 4.0, 0.0));
}

#[test]
fn climber_loses_gravity_and_climbs_with_keys() {
    let mut f = fixture();
    f.drop_ladder();
    f.step_into_zone();
    assert_eq!(f.ladder().climbers(), &[f.player]);
    assert!(f.controller().is_climbing());
    assert_eq!(f.gravity(), 0.0);

    press_key(&mut f.app, KeyCode::KeyW);
    f.app.update();
    assert_eq!(f.velocity().y, 3.0);

    release_key(&mut f.app, KeyCode::KeyW);
    press_key(&mut f.app, KeyCode::KeyS);
    f.app.update();
    assert_eq!(f.velocity().y, -3.0);

    release_key(&mut f.app, KeyCode::KeyS);
    f.app.update();
    assert_eq!(f.velocity().y, 0.0);
}

#[test]
fn leaving_zone_restores_default_gravity() {
    let mut f = fixture();
    f.drop_ladder();
    f.step_into_zone();
    exit(&mut f.app, f.climb_zone, f.feet, f.player, layers::PLAYER_FOOT);

    assert!(f.ladder().climbers().is_empty());
    assert!(!f.controller().is_climbing());
    assert_eq!(f.gravity(), DEFAULT_GRAVITY_SCALE);
}

#[test]
fn non_foot_shapes_do_not_climb() {
    let mut f = fixture();
    f.drop_ladder();
    enter(&mut f.app, f.climb_zone, f.feet, f.player, layers::PLAYER);
    assert!(f.ladder().climbers().is_empty());
    assert!(!f.controller().is_climbing());
}
