//! Player-related components.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Group;
use serde::Deserialize;

use crate::core::{floor_duration, layers};

/// Marker component for player entities.
#[derive(Component)]
pub struct Player;

/// Marks a player's feet collider (child of the player body).
#[derive(Component, Debug, Clone, Copy)]
pub struct FootCollider {
    pub owner: Entity,
}

/// Marks a player's upper-body collider, the one that slides when crouching.
#[derive(Component, Debug, Clone, Copy)]
pub struct TopCollider {
    pub owner: Entity,
}

/// When the jump gets re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum JumpRearm {
    /// Re-arm on every tick the ground probe reports ground.
    #[default]
    GroundProbe,
    /// Re-arm only when the feet land on top of ground or a player
    /// (contact normal pointing up by more than [`LANDING_NORMAL_MIN_Y`]).
    LandingContact,
}

/// Minimum upward component of a contact normal that counts as a landing.
pub const LANDING_NORMAL_MIN_Y: f32 = 0.5;

/// Per-player tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base horizontal speed in units per second
    pub move_speed: f32,
    /// Speed multiplier when crouching on the ground
    pub crouch_speed_multiplier: f32,
    /// Apex height of a jump
    pub jump_height: f32,
    /// Radius of the ground probe circle
    pub ground_check_radius: f32,
    /// Ground probe position relative to the body
    pub ground_check_offset: (f32, f32),
    /// Seconds a full crouch or stand transition takes
    pub transition_time: f32,
    /// Inset of the top edge of the uncrouch probe
    pub uncrouch_buffer: f32,
    /// Vertical speed when climbing
    pub climb_speed: f32,
    /// Half size of the feet collider
    pub foot_half_extents: (f32, f32),
    /// Feet collider position relative to the body
    pub foot_offset: (f32, f32),
    /// Half size of the upper-body collider
    pub top_half_extents: (f32, f32),
    /// Upper-body collider position when standing
    pub stand_offset: (f32, f32),
    /// Upper-body collider position when crouched
    pub crouch_offset: (f32, f32),
    /// Treat teammates' colliders as ground (standing on each other)
    pub stand_on_teammates: bool,
    pub jump_rearm: JumpRearm,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            crouch_speed_multiplier: 0.5,
            jump_height: 2.0,
            ground_check_radius: 0.1,
            ground_check_offset: (0.0, -0.5),
            transition_time: 0.1,
            uncrouch_buffer: 0.03,
            climb_speed: 3.0,
            foot_half_extents: (0.5, 0.5),
            foot_offset: (0.0, 0.0),
            top_half_extents: (0.5, 0.5),
            stand_offset: (0.0, 1.0),
            crouch_offset: (0.0, 0.0),
            stand_on_teammates: true,
            jump_rearm: JumpRearm::GroundProbe,
        }
    }
}

impl PlayerConfig {
    /// Floor time constants and clamp negative magnitudes.
    pub fn sanitized(self) -> Self {
        Self {
            move_speed: self.move_speed.max(0.0),
            crouch_speed_multiplier: self.crouch_speed_multiplier.max(0.0),
            jump_height: self.jump_height.max(0.0),
            ground_check_radius: self.ground_check_radius.max(0.0),
            transition_time: floor_duration(self.transition_time),
            uncrouch_buffer: self.uncrouch_buffer.max(0.0),
            climb_speed: self.climb_speed.max(0.0),
            ..self
        }
    }

    /// Categories the ground probe and the uncrouch probe collide with.
    pub fn ground_mask(&self) -> Group {
        if self.stand_on_teammates {
            layers::GROUND | layers::PLAYER | layers::PLAYER_FOOT
        } else {
            layers::GROUND
        }
    }
}

/// Per-player key map.
#[derive(Component, Debug, Clone, Copy)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub crouch: KeyCode,
    pub jump: KeyCode,
}

impl KeyBindings {
    /// First player: A/D to move, S to crouch, W to jump.
    pub fn wasd() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            crouch: KeyCode::KeyS,
            jump: KeyCode::KeyW,
        }
    }

    /// Second player on the arrow keys.
    pub fn arrows() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            crouch: KeyCode::ArrowDown,
            jump: KeyCode::ArrowUp,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::wasd()
    }
}

/// Logical button state sampled once per tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub crouch: bool,
    pub jump: bool,
    /// Jump went down this tick
    pub jump_pressed: bool,
}

impl PlayerInput {
    pub fn sample(keyboard: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Self {
        Self {
            left: keyboard.pressed(bindings.left),
            right: keyboard.pressed(bindings.right),
            crouch: keyboard.pressed(bindings.crouch),
            jump: keyboard.pressed(bindings.jump),
            jump_pressed: keyboard.just_pressed(bindings.jump),
        }
    }

    /// -1, 0 or +1. Left wins when both are held.
    pub fn horizontal(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    /// Climb up intent (the jump key).
    pub fn up(&self) -> bool {
        self.jump
    }

    /// Climb down intent (the crouch key).
    pub fn down(&self) -> bool {
        self.crouch
    }
}

/// How the vertical velocity is driven this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VerticalDrive {
    /// Leave it to gravity
    #[default]
    Free,
    /// Climbing at a fixed speed
    Climb(f32),
    /// Jump launch speed
    Launch(f32),
}

/// Velocity and gravity decided by the controller, applied in the physics phase.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MotionIntent {
    pub horizontal: f32,
    pub vertical: VerticalDrive,
    pub gravity_scale: f32,
}

impl Default for MotionIntent {
    fn default() -> Self {
        Self {
            horizontal: 0.0,
            vertical: VerticalDrive::Free,
            gravity_scale: 1.0,
        }
    }
}

impl MotionIntent {
    /// New linear velocity given the current one.
    pub fn apply(&self, velocity: Vec2) -> Vec2 {
        let vertical = match self.vertical {
            VerticalDrive::Free => velocity.y,
            VerticalDrive::Climb(v) | VerticalDrive::Launch(v) => v,
        };
        Vec2::new(self.horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_wins_over_right() {
        let input = PlayerInput {
            left: true,
            right: true,
            ..default()
        };
        assert_eq!(input.horizontal(), -1.0);
    }

    #[test]
    fn sample_reads_bound_keys_only() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowUp);
        keyboard.press(KeyCode::KeyD);

        let first = PlayerInput::sample(&keyboard, &KeyBindings::wasd());
        assert!(first.right && !first.jump && !first.jump_pressed);

        let second = PlayerInput::sample(&keyboard, &KeyBindings::arrows());
        assert!(second.jump && second.jump_pressed && second.up());
        assert_eq!(second.horizontal(), 0.0);
    }

    #[test]
    fn free_drive_keeps_vertical_velocity() {
        let intent = MotionIntent {
            horizontal: 2.5,
            ..default()
        };
        assert_eq!(intent.apply(Vec2::new(9.0, -4.0)), Vec2::new(2.5, -4.0));
    }

    #[test]
    fn climb_drive_overrides_vertical_velocity() {
        let intent = MotionIntent {
            horizontal: 0.0,
            vertical: VerticalDrive::Climb(3.0),
            gravity_scale: 0.0,
        };
        assert_eq!(intent.apply(Vec2::new(1.0, -10.0)), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn teammates_count_as_ground_when_enabled() {
        let config = PlayerConfig::default();
        assert!(config.ground_mask().contains(layers::PLAYER));
        assert!(config.ground_mask().contains(layers::PLAYER_FOOT));
        let solo = PlayerConfig {
            stand_on_teammates: false,
            ..default()
        };
        assert_eq!(solo.ground_mask(), layers::GROUND);
    }
}
