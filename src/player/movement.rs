//! Player systems: input sampling, controller ticks, callbacks and the
//! physics hand-off.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::controller::PlayerController;
use crate::core::{layers, ContactPhase, FootContact, TriggerEvent};
use crate::physics::RapierShapeQuery;
use crate::world::{ClimbZone, Ladder};

/// Gravity used when no rapier configuration is present.
pub const FALLBACK_GRAVITY_Y: f32 = -9.81;

/// Sample each player's bound keys into its [`PlayerInput`].
pub fn sample_player_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut players: Query<(&KeyBindings, &mut PlayerInput)>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    for (bindings, mut input) in players.iter_mut() {
        *input = PlayerInput::sample(&keyboard, bindings);
    }
}

/// Tick every controller against the physics world.
///
/// Writes the resulting [`MotionIntent`] and moves each top collider to the
/// controller's interpolated offset. Skipped when no physics context exists.
pub fn update_controllers(
    time: Res<Time>,
    rapier_context: Query<&RapierContext>,
    rapier_config: Query<&RapierConfiguration>,
    mut players: Query<
        (Entity, &Transform, &PlayerInput, &mut PlayerController, &mut MotionIntent),
        With<Player>,
    >,
    mut tops: Query<(&TopCollider, &mut Transform), Without<Player>>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };
    let gravity_y = rapier_config
        .get_single()
        .map(|config| config.gravity.y)
        .unwrap_or(FALLBACK_GRAVITY_Y);
    let dt = time.delta_secs();

    for (entity, transform, input, mut controller, mut intent) in players.iter_mut() {
        let shapes = RapierShapeQuery::new(context).excluding(entity);
        *intent = controller.tick(input, transform.translation.truncate(), &shapes, gravity_y, dt);
    }

    for (top, mut transform) in tops.iter_mut() {
        if let Ok((_, _, _, controller, _)) = players.get(top.owner) {
            let offset = controller.top_offset();
            transform.translation.x = offset.x;
            transform.translation.y = offset.y;
        }
    }
}

/// Set the climbing flag from climb zone enter/exit.
///
/// Entering a zone only counts once its ladder has dropped.
pub fn handle_player_triggers(
    mut triggers: EventReader<TriggerEvent>,
    zones: Query<&ClimbZone>,
    ladders: Query<&Ladder>,
    mut controllers: Query<&mut PlayerController>,
) {
    for trigger in triggers.read() {
        let Ok(zone) = zones.get(trigger.zone) else {
            continue;
        };
        if !trigger.category.intersects(layers::PLAYER_FOOT) {
            continue;
        }
        let Ok(mut controller) = controllers.get_mut(trigger.body) else {
            continue;
        };

        match trigger.phase {
            ContactPhase::Enter => {
                let dropped = ladders.get(zone.ladder).is_ok_and(Ladder::is_dropped);
                if dropped {
                    controller.set_climbing(true);
                }
            }
            ContactPhase::Exit => controller.set_climbing(false),
        }
    }
}

/// Feed foot landings to the controllers.
pub fn handle_foot_contacts(
    mut contacts: EventReader<FootContact>,
    mut controllers: Query<&mut PlayerController>,
) {
    for contact in contacts.read() {
        if let Ok(mut controller) = controllers.get_mut(contact.body) {
            if controller.on_foot_contact(contact.category, contact.normal) {
                debug!("{:?} landed, jump armed", contact.body);
            }
        }
    }
}

/// Apply the decided motion to the rigid body.
pub fn apply_motion(
    mut players: Query<(&MotionIntent, &mut Velocity, &mut GravityScale), With<Player>>,
) {
    for (intent, mut velocity, mut gravity) in players.iter_mut() {
        velocity.linvel = intent.apply(velocity.linvel);
        gravity.0 = intent.gravity_scale;
    }
}

/// Spawn a player body with its feet and upper-body colliders.
///
/// The body itself carries no collider. The feet collider is the only
/// shape in the `PLAYER_FOOT` category, the top collider is the only one
/// in `PLAYER` and is what teammates stand on.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    bindings: KeyBindings,
    config: &PlayerConfig,
) -> Entity {
    let config = config.clone().sanitized();
    let foot_half = Vec2::from(config.foot_half_extents);
    let top_half = Vec2::from(config.top_half_extents);
    let foot_offset = Vec2::from(config.foot_offset);
    let stand_offset = Vec2::from(config.stand_offset);
    let solids = layers::GROUND | layers::PLAYER | layers::CRATE;

    let player = commands
        .spawn((
            Player,
            Name::new("Player"),
            PlayerController::new(config.clone(), 1.0),
            PlayerInput::default(),
            MotionIntent::default(),
            bindings,
            Transform::from_translation(position.extend(0.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Velocity::zero(),
            GravityScale(1.0),
            LockedAxes::ROTATION_LOCKED,
            Ccd::enabled(),
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent.spawn((
            FootCollider { owner: player },
            Transform::from_translation(foot_offset.extend(0.0)),
            Collider::cuboid(foot_half.x, foot_half.y),
            Friction::coefficient(0.0),
            CollisionGroups::new(layers::PLAYER_FOOT, solids | layers::PLATE | layers::LADDER),
            ActiveEvents::COLLISION_EVENTS,
        ));
        parent.spawn((
            TopCollider { owner: player },
            Transform::from_translation(stand_offset.extend(0.0)),
            Collider::cuboid(top_half.x, top_half.y),
            Friction::coefficient(0.0),
            CollisionGroups::new(layers::PLAYER, solids | layers::PLAYER_FOOT),
        ));
    });

    info!("Spawned player {:?} at {}", player, position);
    player
}
