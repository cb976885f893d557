//! Platformer character controller.
//!
//! A pure state machine over stance (standing/crouching), support
//! (grounded/airborne) and climbing. Each tick it reads the sampled input
//! and a [`ShapeQuery`], updates its own state and returns the
//! [`MotionIntent`] the physics phase should apply.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Group;

use super::components::{
    JumpRearm, MotionIntent, PlayerConfig, PlayerInput, VerticalDrive, LANDING_NORMAL_MIN_Y,
};
use crate::core::{floor_duration, layers, move_towards_2d};
use crate::physics::ShapeQuery;

/// Launch speed that reaches `height` under constant gravity `g`.
pub fn launch_velocity(gravity: f32, height: f32) -> f32 {
    (2.0 * gravity.abs() * height.max(0.0)).sqrt()
}

/// Controller state for one character.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    config: PlayerConfig,
    crouching: bool,
    climbing: bool,
    jump_ready: bool,
    grounded: bool,
    top_offset: Vec2,
    /// Units per second the top collider slides at
    crouch_speed: f32,
    orig_gravity: f32,
    gravity_scale: f32,
}

impl PlayerController {
    /// Create a standing, unarmed controller. `orig_gravity` is the body's
    /// gravity scale at spawn and is restored whenever gravity comes back.
    pub fn new(config: PlayerConfig, orig_gravity: f32) -> Self {
        let config = config.sanitized();
        let stand = Vec2::from(config.stand_offset);
        let crouch = Vec2::from(config.crouch_offset);
        let crouch_speed = stand.distance(crouch) / floor_duration(config.transition_time);

        Self {
            config,
            crouching: false,
            climbing: false,
            jump_ready: false,
            grounded: false,
            top_offset: stand,
            crouch_speed,
            orig_gravity,
            gravity_scale: orig_gravity,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn is_climbing(&self) -> bool {
        self.climbing
    }

    pub fn is_jump_ready(&self) -> bool {
        self.jump_ready
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Current local offset of the top collider.
    pub fn top_offset(&self) -> Vec2 {
        self.top_offset
    }

    pub fn crouch_speed(&self) -> f32 {
        self.crouch_speed
    }

    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    pub fn original_gravity(&self) -> f32 {
        self.orig_gravity
    }

    /// Entering or leaving a ladder climb zone.
    pub fn set_climbing(&mut self, climbing: bool) {
        self.climbing = climbing;
    }

    /// A solid contact started against the feet.
    ///
    /// Under [`JumpRearm::LandingContact`] this is the only way the jump
    /// re-arms: the surface must be ground or a player and the normal must
    /// point up by more than [`LANDING_NORMAL_MIN_Y`]. Returns true if it armed.
    pub fn on_foot_contact(&mut self, category: Group, normal: Vec2) -> bool {
        if self.config.jump_rearm != JumpRearm::LandingContact {
            return false;
        }
        let landable = layers::GROUND | layers::PLAYER | layers::PLAYER_FOOT;
        if !category.intersects(landable) || normal.y <= LANDING_NORMAL_MIN_Y {
            return false;
        }
        self.jump_ready = true;
        true
    }

    /// Centre and half size of the box probed before standing up.
    ///
    /// It covers the standing top collider with its top edge inset by the
    /// uncrouch buffer.
    pub fn uncrouch_probe(&self, body: Vec2) -> (Vec2, Vec2) {
        let buffer = self.config.uncrouch_buffer;
        let standing_center = body + Vec2::from(self.config.stand_offset);
        let full = Vec2::from(self.config.top_half_extents) * 2.0;
        let size = Vec2::new(full.x, (full.y - buffer).max(0.0));
        (standing_center + Vec2::NEG_Y * (buffer * 0.5), size * 0.5)
    }

    /// True if the standing-height probe is free of ground.
    pub fn can_uncrouch(&self, body: Vec2, shapes: &impl ShapeQuery) -> bool {
        let (center, half_extents) = self.uncrouch_probe(body);
        !shapes.overlaps_box(center, half_extents, self.config.ground_mask())
    }

    /// Advance one tick.
    ///
    /// `body` is the body's world position, `gravity_y` the world gravity
    /// acceleration (negative is down).
    pub fn tick(
        &mut self,
        input: &PlayerInput,
        body: Vec2,
        shapes: &impl ShapeQuery,
        gravity_y: f32,
        dt: f32,
    ) -> MotionIntent {
        // 1) Crouch: instant duck, stand only with clearance
        if input.crouch {
            self.crouching = true;
        } else if self.crouching && self.can_uncrouch(body, shapes) {
            self.crouching = false;
        }

        // 2) Slide the top collider toward its stance offset
        let target = if self.crouching {
            Vec2::from(self.config.crouch_offset)
        } else {
            Vec2::from(self.config.stand_offset)
        };
        self.top_offset = move_towards_2d(self.top_offset, target, self.crouch_speed * dt.max(0.0));

        // 3) Ground probe
        let probe = body + Vec2::from(self.config.ground_check_offset);
        self.grounded = shapes.overlaps_circle(
            probe,
            self.config.ground_check_radius,
            self.config.ground_mask(),
        );

        // 4) Horizontal speed
        let slowed = self.crouching && self.grounded && !self.climbing;
        let speed = if slowed {
            self.config.move_speed * self.config.crouch_speed_multiplier
        } else {
            self.config.move_speed
        };
        let horizontal = input.horizontal() * speed;

        if self.grounded && self.config.jump_rearm == JumpRearm::GroundProbe {
            self.jump_ready = true;
        }

        // 5) Climbing overrides gravity; otherwise jump if armed
        let vertical = if self.climbing {
            self.gravity_scale = 0.0;
            let climb = if input.up() {
                self.config.climb_speed
            } else if input.down() {
                -self.config.climb_speed
            } else {
                0.0
            };
            VerticalDrive::Climb(climb)
        } else {
            self.gravity_scale = self.orig_gravity;
            if self.jump_ready && input.jump_pressed {
                self.jump_ready = false;
                let g = gravity_y * self.gravity_scale;
                VerticalDrive::Launch(launch_velocity(g, self.config.jump_height))
            } else {
                VerticalDrive::Free
            }
        };

        MotionIntent {
            horizontal,
            vertical,
            gravity_scale: self.gravity_scale,
        }
    }
}
