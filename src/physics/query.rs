//! Overlap queries consumed by the character controller.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Synchronous, side-effect-free overlap tests against a category mask.
pub trait ShapeQuery {
    /// First shape in `mask` overlapping the circle, if any.
    fn first_circle_overlap(&self, center: Vec2, radius: f32, mask: Group) -> Option<Entity>;

    /// First shape in `mask` overlapping the axis-aligned box, if any.
    fn first_box_overlap(&self, center: Vec2, half_extents: Vec2, mask: Group) -> Option<Entity>;

    fn overlaps_circle(&self, center: Vec2, radius: f32, mask: Group) -> bool {
        self.first_circle_overlap(center, radius, mask).is_some()
    }

    fn overlaps_box(&self, center: Vec2, half_extents: Vec2, mask: Group) -> bool {
        self.first_box_overlap(center, half_extents, mask).is_some()
    }
}

/// [`ShapeQuery`] backed by a rapier context.
///
/// Only colliders whose memberships intersect the mask are reported. Sensors
/// are skipped so trigger volumes never count as ground.
pub struct RapierShapeQuery<'a> {
    context: &'a RapierContext,
    exclude_body: Option<Entity>,
}

impl<'a> RapierShapeQuery<'a> {
    pub fn new(context: &'a RapierContext) -> Self {
        Self {
            context,
            exclude_body: None,
        }
    }

    /// Ignore every collider attached to `body` (the querying character).
    pub fn excluding(mut self, body: Entity) -> Self {
        self.exclude_body = Some(body);
        self
    }

    fn filter(&self, mask: Group) -> QueryFilter<'static> {
        let mut filter = QueryFilter::default()
            .exclude_sensors()
            .groups(CollisionGroups::new(Group::ALL, mask));
        if let Some(body) = self.exclude_body {
            filter = filter.exclude_rigid_body(body);
        }
        filter
    }

    fn first_overlap(&self, center: Vec2, shape: &Collider, mask: Group) -> Option<Entity> {
        self.context
            .intersection_with_shape(center, 0.0, shape, self.filter(mask))
    }
}

impl ShapeQuery for RapierShapeQuery<'_> {
    fn first_circle_overlap(&self, center: Vec2, radius: f32, mask: Group) -> Option<Entity> {
        self.first_overlap(center, &Collider::ball(radius), mask)
    }

    fn first_box_overlap(&self, center: Vec2, half_extents: Vec2, mask: Group) -> Option<Entity> {
        if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
            return None;
        }
        self.first_overlap(center, &Collider::cuboid(half_extents.x, half_extents.y), mask)
    }
}
