//! Shared fixtures for headless integration tests.
//!
//! The apps built here run every gameplay plugin without a window. By
//! default rapier is left out and collision callbacks are simulated by
//! sending `TriggerEvent`s; `with_rapier` adds the real physics step.

#![allow(dead_code)]

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use bevy_rapier2d::prelude::{Group, NoUserData, RapierPhysicsPlugin};
use coop_platformer::core::TriggerEvent;
use coop_platformer::CoopPlatformerPlugin;

/// Fixed tick length of the test apps.
pub const TICK: f32 = 1.0 / 60.0;

/// Builder for headless test `App` instances.
pub struct TestAppBuilder {
    app: App,
}

impl TestAppBuilder {
    /// Minimal plugins, states, transforms, keyboard state and the game plugin.
    #[must_use]
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin)
            .add_plugins(TransformPlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(TICK)))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(CoopPlatformerPlugin);
        Self { app }
    }

    /// Step a real rapier world, one world unit per metre.
    #[must_use]
    pub fn with_rapier(mut self) -> Self {
        self.app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0));
        self
    }

    /// Add a startup system.
    #[must_use]
    pub fn with_startup<M>(mut self, system: impl IntoSystemConfigs<M>) -> Self {
        self.app.add_systems(Startup, system);
        self
    }

    /// Run one update so startup systems and tunables are in place.
    #[must_use]
    pub fn prime(mut self) -> Self {
        self.app.update();
        self
    }

    #[must_use]
    pub fn build(self) -> App {
        self.app
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `system` once against the app's world and return its output.
pub fn run_once<Out: 'static, M>(app: &mut App, system: impl IntoSystem<(), Out, M>) -> Out {
    app.world_mut()
        .run_system_once(system)
        .expect("one-shot system runs")
}

/// Advance the app by `ticks` updates.
pub fn tick(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

/// Spawn a bare entity to stand in for a collider or body.
pub fn stand_in(app: &mut App) -> Entity {
    app.world_mut().spawn_empty().id()
}

/// Simulate a shape entering `zone` and run one tick.
pub fn enter(app: &mut App, zone: Entity, collider: Entity, body: Entity, category: Group) {
    app.world_mut()
        .send_event(TriggerEvent::enter(zone, collider, body, category));
    app.update();
}

/// Simulate a shape leaving `zone` and run one tick.
pub fn exit(app: &mut App, zone: Entity, collider: Entity, body: Entity, category: Group) {
    app.world_mut()
        .send_event(TriggerEvent::exit(zone, collider, body, category));
    app.update();
}

/// Press a key for the next tick.
pub fn press_key(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
}

/// Release a key and forget this tick's edges.
pub fn release_key(app: &mut App, key: KeyCode) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(key);
    keyboard.clear();
}
