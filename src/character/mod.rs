//! Character domain: behaviour state machines and the actors that run them.

mod controller;
mod machine;
pub mod rhea;
mod spawn;
mod systems;


pub use controller::{AnimationCue, CharacterController, Facing, MOVE_DEADZONE, Targeting};
pub use machine::{CharacterState, CharacterStateMachine, StateInput, TransitionInfo};
pub use spawn::spawn_character;

use bevy::prelude::*;

use crate::character::systems::{
    fixed_update_character_states, sync_sprite_facing, update_character_states,
};
use crate::controls::read_player_input;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                update_character_states.after(read_player_input),
                sync_sprite_facing.after(update_character_states),
            ),
        )
        .add_systems(FixedUpdate, fixed_update_character_states);
    }
}
