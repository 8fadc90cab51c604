//! Character domain: actor spawning for a round.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::character::rhea::RheaIdleState;
use crate::character::{
    AnimationCue, CharacterController, CharacterStateMachine, Facing, StateInput, Targeting,
};
use crate::content::{CharacterType, MatchConfig};
use crate::controls::SpellMap;
use crate::core::PlayerIndex;
use crate::stats::PlayerStats;

const ACTOR_SIZE: Vec2 = Vec2::new(24.0, 48.0);

fn initial_state_machine(
    character: CharacterType,
    input: &mut StateInput<'_>,
) -> CharacterStateMachine {
    match character {
        CharacterType::Rhea => CharacterStateMachine::new::<RheaIdleState>(input),
    }
}

/// Spawn the actor for `player` at its spawn point, already in its initial state.
///
/// `Targeting` starts empty; the caller wires it once both actors exist.
pub fn spawn_character(
    commands: &mut Commands,
    config: &MatchConfig,
    player: PlayerIndex,
    spells: &mut SpellMap,
    stats: &mut PlayerStats,
) -> Entity {
    let character = config.character(player);
    let position = config.spawn_point(player);

    let mut controller = CharacterController::new(player, character);
    if config.spawn_point(player.opponent()).x < position.x {
        controller.facing = Facing::Left;
    }

    let mut velocity = LinearVelocity::default();
    let mut anim = AnimationCue::default();
    let mut last_words = Vec::new();
    let machine = {
        let mut input = StateInput::new(
            &mut controller,
            &mut velocity,
            &mut anim,
            spells,
            stats,
            &mut last_words,
        );
        input.position = position;
        initial_state_machine(character, &mut input)
    };

    commands
        .spawn((
            Name::new(format!("{} {}", player, character.name())),
            // Identity & behaviour
            (controller, machine, anim, Targeting::default()),
            // Rendering
            Sprite {
                color: character.portrait_color(),
                custom_size: Some(ACTOR_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(ACTOR_SIZE.x, ACTOR_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                velocity,
                GravityScale(0.0),
            ),
        ))
        .id()
}
