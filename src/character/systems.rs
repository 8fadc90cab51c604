//! Character domain: per-frame and per-physics-step state machine ticks.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::character::{
    AnimationCue, CharacterController, CharacterStateMachine, Facing, StateInput, Targeting,
};
use crate::controls::{PlayerInputs, SpellMap};
use crate::core::LastWordEvent;
use crate::stats::PlayerStats;

pub(crate) fn update_character_states(
    time: Res<Time>,
    inputs: Res<PlayerInputs>,
    mut spells: ResMut<SpellMap>,
    mut stats: ResMut<PlayerStats>,
    mut last_word_events: MessageWriter<LastWordEvent>,
    positions: Query<&Transform, With<CharacterController>>,
    mut characters: Query<(
        &mut CharacterStateMachine,
        &mut CharacterController,
        &mut AnimationCue,
        &mut LinearVelocity,
        &Transform,
        &Targeting,
    )>,
) {
    let dt = time.delta_secs();
    let mut last_words = Vec::new();

    for (mut machine, mut controller, mut anim, mut velocity, transform, targeting) in
        &mut characters
    {
        let target = targeting
            .target
            .and_then(|entity| positions.get(entity).ok())
            .map(|target| target.translation.truncate());
        let movement = inputs.get(controller.player).axis;

        let mut input = StateInput::new(
            &mut controller,
            &mut velocity,
            &mut anim,
            &mut spells,
            &mut stats,
            &mut last_words,
        );
        input.movement = movement;
        input.position = transform.translation.truncate();
        input.target = target;
        input.dt = dt;

        machine.update(&mut input);
    }

    for event in last_words {
        last_word_events.write(event);
    }
}

pub(crate) fn fixed_update_character_states(
    time: Res<Time>,
    inputs: Res<PlayerInputs>,
    mut spells: ResMut<SpellMap>,
    mut stats: ResMut<PlayerStats>,
    mut last_word_events: MessageWriter<LastWordEvent>,
    mut characters: Query<(
        &mut CharacterStateMachine,
        &mut CharacterController,
        &mut AnimationCue,
        &mut LinearVelocity,
        &Transform,
    )>,
) {
    let dt = time.delta_secs();
    let mut last_words = Vec::new();

    for (mut machine, mut controller, mut anim, mut velocity, transform) in &mut characters {
        let movement = inputs.get(controller.player).axis;

        let mut input = StateInput::new(
            &mut controller,
            &mut velocity,
            &mut anim,
            &mut spells,
            &mut stats,
            &mut last_words,
        );
        input.movement = movement;
        input.position = transform.translation.truncate();
        input.dt = dt;

        machine.fixed_update(&mut input);
    }

    for event in last_words {
        last_word_events.write(event);
    }
}

pub(crate) fn sync_sprite_facing(
    mut query: Query<(&CharacterController, &mut Sprite), Changed<CharacterController>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = controller.facing == Facing::Left;
    }
}
