//! Translate rapier collision reports into gameplay events.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use crate::core::{ContactPhase, FootContact, TriggerEvent};
use crate::player::FootCollider;

/// Convert rapier `CollisionEvent`s into [`TriggerEvent`]s and [`FootContact`]s.
///
/// Sensor overlaps become one trigger event per sensor side, carrying the
/// other collider, its owning body and its category. Solid contacts that
/// start against a foot collider become a foot contact with the normal
/// oriented from the other surface toward the foot.
#[allow(clippy::too_many_arguments)]
pub fn route_collision_events(
    mut collisions: EventReader<CollisionEvent>,
    rapier_context: Query<&RapierContext>,
    groups: Query<&CollisionGroups>,
    sensors: Query<(), With<Sensor>>,
    bodies: Query<(), With<RigidBody>>,
    parents: Query<&Parent>,
    feet: Query<&FootCollider>,
    mut triggers: EventWriter<TriggerEvent>,
    mut foot_contacts: EventWriter<FootContact>,
) {
    let context = rapier_context.get_single().ok();
    let category_of = |entity: Entity| {
        groups
            .get(entity)
            .map(|g| g.memberships)
            .unwrap_or(Group::ALL)
    };
    let body_of = |entity: Entity| {
        if bodies.contains(entity) {
            entity
        } else {
            parents.get(entity).map(Parent::get).unwrap_or(entity)
        }
    };

    for event in collisions.read() {
        let (a, b, flags, phase) = match *event {
            CollisionEvent::Started(a, b, flags) => (a, b, flags, ContactPhase::Enter),
            CollisionEvent::Stopped(a, b, flags) => (a, b, flags, ContactPhase::Exit),
        };

        if flags.contains(CollisionEventFlags::SENSOR) {
            for (zone, other) in [(a, b), (b, a)] {
                if !sensors.contains(zone) || sensors.contains(other) {
                    continue;
                }
                triggers.send(TriggerEvent {
                    zone,
                    collider: other,
                    body: body_of(other),
                    category: category_of(other),
                    phase,
                });
            }
            continue;
        }

        if phase != ContactPhase::Enter {
            continue;
        }
        let Some(context) = context else {
            continue;
        };
        for (foot, other) in [(a, b), (b, a)] {
            let Ok(foot_collider) = feet.get(foot) else {
                continue;
            };
            let Some(normal) = landing_normal(context, foot, other) else {
                continue;
            };
            foot_contacts.send(FootContact {
                body: foot_collider.owner,
                category: category_of(other),
                normal,
            });
        }
    }
}

/// Most upward contact normal between `foot` and `other`, pointing toward the foot.
fn landing_normal(context: &RapierContext, foot: Entity, other: Entity) -> Option<Vec2> {
    let pair = context.contact_pair(foot, other)?;
    let sign = if pair.collider1() == foot { -1.0 } else { 1.0 };
    pair.manifolds()
        .filter(|manifold| manifold.num_points() > 0)
        .map(|manifold| manifold.normal() * sign)
        .max_by(|l, r| l.y.total_cmp(&r.y))
}
