use bevy::prelude::*;

use crate::character::rhea::RheaIdleState;
use crate::character::{CharacterState, StateInput, TransitionInfo};
use crate::controls::SpellKind;

/// Rooted in place and immune to damage until the shield drops.
#[derive(Debug, Default)]
pub struct RheaShieldState {
    remaining: f32,
}

impl CharacterState for RheaShieldState {
    fn name(&self) -> &'static str {
        "Shield"
    }

    fn enter(&mut self, input: &mut StateInput<'_>, _info: Option<TransitionInfo>) {
        input.anim.play("Shield");
        input.spells.start_cooldown(input.player, SpellKind::Intrinsic);
        input.stats.set_shielded(input.player, true);

        self.remaining = input.controller.tuning.shield_time;
        input.velocity.0.x = 0.0;
    }

    fn exit(&mut self, input: &mut StateInput<'_>) {
        input.stats.set_shielded(input.player, false);
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
        input
            .controller
            .handle_movement(Vec2::ZERO, input.dt, &mut *input.velocity);
    }
}
