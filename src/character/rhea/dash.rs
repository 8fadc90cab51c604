use bevy::prelude::*;

use crate::character::rhea::RheaIdleState;
use crate::character::{CharacterState, MOVE_DEADZONE, StateInput, TransitionInfo};
use crate::controls::SpellKind;

/// Short burst along the movement input, or forward when standing still.
#[derive(Debug, Default)]
pub struct RheaDashState {
    direction: Vec2,
    remaining: f32,
}

impl CharacterState for RheaDashState {
    fn name(&self) -> &'static str {
        "Dash"
    }

    fn enter(&mut self, input: &mut StateInput<'_>, _info: Option<TransitionInfo>) {
        input.anim.play("Dash");
        input.spells.start_cooldown(input.player, SpellKind::Movement);

        self.remaining = input.controller.tuning.dash_time;
        self.direction = if input.movement.length() > MOVE_DEADZONE {
            input.movement.normalize()
        } else {
            Vec2::X * input.controller.facing.sign()
        };
        input.controller.update_facing(self.direction.x);
    }

    fn update(&mut self, input: &mut StateInput<'_>) {
        self.remaining -= input.dt;
        if self.remaining <= 0.0 {
            input.change_state::<RheaIdleState>(Some(TransitionInfo {
                velocity: input.velocity.0,
            }));
        }
    }

    fn fixed_update(&mut self, input: &mut StateInput<'_>) {
        input.velocity.0 = self.direction * input.controller.tuning.dash_speed;
    }
}
