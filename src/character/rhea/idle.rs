use crate::character::rhea::{RheaDashState, RheaShieldState, handle_move_animation};
use crate::character::{CharacterState, StateInput, TransitionInfo};
use crate::controls::SpellKind;
use crate::core::LastWordEvent;

#[derive(Debug, Default)]
pub struct RheaIdleState {
    prev_horizontal_movement: f32,
}

impl CharacterState for RheaIdleState {
    fn name(&self) -> &'static str {
        "Idle"
    }

    fn enter(&mut self, input: &mut StateInput<'_>, info: Option<TransitionInfo>) {
        self.prev_horizontal_movement = 0.0;
        input.anim.play("Idle");

        // Leaving a dash keeps its direction but not its speed
        if let Some(info) = info {
            input.velocity.0 = info.velocity.clamp_length_max(input.controller.tuning.max_speed);
        }
    }

    fn update(&mut self, input: &mut StateInput<'_>) {
        input
            .controller
            .handle_place_circle(input.position, input.target);

        // All three checks run every tick; if several fire, the last request wins.
        if input.spells.get_spell_down(input.player, SpellKind::Intrinsic) {
            input.change_state::<RheaShieldState>(None);
        }

        if input.spells.get_spell_down(input.player, SpellKind::Primary) {
            input.spells.start_cooldown(input.player, SpellKind::Primary);
            input.last_words.push(LastWordEvent {
                player: input.player,
            });
        }

        if input.spells.get_spell_down(input.player, SpellKind::Movement) {
            input.change_state::<RheaDashState>(None);
        }

        handle_move_animation(&mut self.prev_horizontal_movement, input);
    }

    fn fixed_update(&mut self, input: &mut StateInput<'_>) {
        input
            .controller
            .handle_movement(input.movement, input.dt, &mut *input.velocity);
    }
}
