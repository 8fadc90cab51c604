//! Controls domain: player input sampling and the spell registry.

mod input;
mod spell_map;

pub use input::PlayerInputs;
pub use spell_map::{SpellKind, SpellMap};

pub(crate) use input::read_player_input;

use bevy::prelude::*;

use crate::controls::input::tick_spell_cooldowns;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpellMap>()
            .init_resource::<PlayerInputs>()
            .add_systems(Update, (tick_spell_cooldowns, read_player_input).chain());
    }
}
