//! Collision categories shared by colliders, sensors and shape queries.

use bevy_rapier2d::prelude::Group;

/// Static level geometry the characters can stand on.
pub const GROUND: Group = Group::GROUP_1;
/// A character's upper-body collider.
pub const PLAYER: Group = Group::GROUP_2;
/// A character's feet collider.
pub const PLAYER_FOOT: Group = Group::GROUP_3;
/// Pushable props that can hold plates down.
pub const CRATE: Group = Group::GROUP_4;
/// Ladder climb zones.
pub const LADDER: Group = Group::GROUP_5;
/// Pressure plate sensors.
pub const PLATE: Group = Group::GROUP_6;

/// Categories that press a plate unless configured otherwise.
pub const DEFAULT_PRESSING: Group = PLAYER_FOOT.union(CRATE);

/// True if any bit of `category` is in `mask`.
pub fn matches(category: Group, mask: Group) -> bool {
    category.intersects(mask)
}
