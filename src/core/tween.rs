//! Shared interpolation helpers.
//!
//! `move_towards` is the constant-speed slide used by doors, ladders and the
//! crouch collider. `smooth_damp` is the critically damped follow used by the
//! camera.

use bevy::prelude::*;

/// Smallest duration any time constant is allowed to take.
pub const MIN_DURATION: f32 = 0.001;

/// Floor a configured duration so it can safely be divided by.
pub fn floor_duration(seconds: f32) -> f32 {
    if seconds.is_finite() {
        seconds.max(MIN_DURATION)
    } else {
        MIN_DURATION
    }
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        return target;
    }
    current + offset / distance * max_delta.max(0.0)
}

/// 2D variant of [`move_towards`].
pub fn move_towards_2d(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    move_towards(current.extend(0.0), target.extend(0.0), max_delta).truncate()
}

/// Critically damped spring toward `target`.
///
/// `velocity` carries the spring state between calls and must be kept by
/// the caller. Roughly reaches the target in `smooth_time` seconds and
/// never overshoots it.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = floor_duration(smooth_time);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Passed the target this step: snap and stop
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec2::ZERO;
    }

    output
}
