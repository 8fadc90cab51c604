//! Character domain: per-actor controller, targeting and animation cues.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{CharacterTuning, CharacterType};
use crate::core::PlayerIndex;

/// Axis magnitude below which movement input counts as released
pub const MOVE_DEADZONE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Movement and reticle handling shared by every state of a character
#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    pub player: PlayerIndex,
    pub tuning: CharacterTuning,
    pub facing: Facing,
    /// World position of the spell placement circle
    pub place_circle: Vec2,
}

impl CharacterController {
    pub fn new(player: PlayerIndex, character: CharacterType) -> Self {
        Self {
            player,
            tuning: character.tuning(),
            facing: Facing::default(),
            place_circle: Vec2::ZERO,
        }
    }

    /// Keep the placement circle on the target, clamped to `circle_range`.
    /// With no target the circle sits at full range in the facing direction.
    pub fn handle_place_circle(&mut self, position: Vec2, target: Option<Vec2>) {
        let range = self.tuning.circle_range;
        let desired = target.unwrap_or(position + Vec2::X * self.facing.sign() * range);
        self.place_circle = position + (desired - position).clamp_length_max(range);
    }

    /// Accelerate toward `axis * max_speed`, or decelerate to rest with no input.
    pub fn handle_movement(&self, axis: Vec2, dt: f32, velocity: &mut LinearVelocity) {
        let axis = axis.clamp_length_max(1.0);
        let target = axis * self.tuning.max_speed;
        let rate = if axis.length() > MOVE_DEADZONE {
            self.tuning.accel
        } else {
            self.tuning.decel
        };

        let current: Vec2 = velocity.0;
        let delta = target - current;
        let step = rate * dt;
        velocity.0 = if delta.length() <= step {
            target
        } else {
            current + delta.normalize() * step
        };
    }

    pub fn update_facing(&mut self, horizontal: f32) {
        if horizontal > MOVE_DEADZONE {
            self.facing = Facing::Right;
        } else if horizontal < -MOVE_DEADZONE {
            self.facing = Facing::Left;
        }
    }
}

/// The opponent this actor aims at
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Targeting {
    pub target: Option<Entity>,
}

/// Fire-and-forget visual cue player plus the movement blend parameter
#[derive(Component, Debug, Default)]
pub struct AnimationCue {
    current: Option<&'static str>,
    /// Horizontal movement fed to the locomotion blend
    pub horizontal: f32,
}

impl AnimationCue {
    pub fn play(&mut self, cue: &'static str) {
        self.current = Some(cue);
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CharacterController {
        CharacterController::new(PlayerIndex::ONE, CharacterType::Rhea)
    }

    #[test]
    fn test_place_circle_clamps_to_range() {
        let mut controller = controller();
        let range = controller.tuning.circle_range;

        controller.handle_place_circle(Vec2::ZERO, Some(Vec2::new(range * 3.0, 0.0)));
        assert!((controller.place_circle - Vec2::new(range, 0.0)).length() < 1e-3);

        controller.handle_place_circle(Vec2::ZERO, Some(Vec2::new(10.0, 5.0)));
        assert_eq!(controller.place_circle, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_place_circle_without_target_uses_facing() {
        let mut controller = controller();
        controller.facing = Facing::Left;
        controller.handle_place_circle(Vec2::new(50.0, 0.0), None);
        assert!(controller.place_circle.x < 50.0);
    }

    #[test]
    fn test_movement_accelerates_and_caps() {
        let controller = controller();
        let mut velocity = LinearVelocity::default();

        controller.handle_movement(Vec2::X, 0.01, &mut velocity);
        let expected = controller.tuning.accel * 0.01;
        assert!((velocity.0.x - expected).abs() < 1e-3);

        controller.handle_movement(Vec2::X, 10.0, &mut velocity);
        assert!((velocity.0.x - controller.tuning.max_speed).abs() < 1e-3);
    }

    #[test]
    fn test_movement_decelerates_to_rest() {
        let controller = controller();
        let mut velocity = LinearVelocity(Vec2::new(100.0, 0.0));

        controller.handle_movement(Vec2::ZERO, 10.0, &mut velocity);
        assert_eq!(velocity.0, Vec2::ZERO);
    }
}
