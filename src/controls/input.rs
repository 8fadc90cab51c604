//! Controls domain: keyboard sampling for both players.

use bevy::prelude::*;

use crate::controls::{SpellKind, SpellMap};
use crate::core::{MatchState, PlayerIndex};

/// Movement input for one player this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub axis: Vec2,
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInputs {
    players: [PlayerInput; 2],
}

impl PlayerInputs {
    pub fn get(&self, player: PlayerIndex) -> PlayerInput {
        self.players[player.index()]
    }

    pub fn set(&mut self, player: PlayerIndex, input: PlayerInput) {
        self.players[player.index()] = input;
    }
}

struct KeyMap {
    up: KeyCode,
    down: KeyCode,
    left: KeyCode,
    right: KeyCode,
    intrinsic: &'static [KeyCode],
    primary: &'static [KeyCode],
    movement: &'static [KeyCode],
}

impl KeyMap {
    fn spell_keys(&self, kind: SpellKind) -> &'static [KeyCode] {
        match kind {
            SpellKind::Intrinsic => self.intrinsic,
            SpellKind::Primary => self.primary,
            SpellKind::Movement => self.movement,
        }
    }
}

const KEY_MAPS: [KeyMap; 2] = [
    KeyMap {
        up: KeyCode::KeyW,
        down: KeyCode::KeyS,
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        intrinsic: &[KeyCode::KeyF],
        primary: &[KeyCode::KeyG],
        movement: &[KeyCode::KeyH],
    },
    KeyMap {
        up: KeyCode::ArrowUp,
        down: KeyCode::ArrowDown,
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        intrinsic: &[KeyCode::Numpad1, KeyCode::KeyJ],
        primary: &[KeyCode::Numpad2, KeyCode::KeyK],
        movement: &[KeyCode::Numpad3, KeyCode::KeyL],
    },
];

fn read_axis(keyboard: &ButtonInput<KeyCode>, keys: &KeyMap) -> Vec2 {
    let mut x = 0.0;
    if keyboard.pressed(keys.left) {
        x -= 1.0;
    }
    if keyboard.pressed(keys.right) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(keys.down) {
        y -= 1.0;
    }
    if keyboard.pressed(keys.up) {
        y += 1.0;
    }

    Vec2::new(x, y)
}

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    match_state: Res<MatchState>,
    mut inputs: ResMut<PlayerInputs>,
    mut spells: ResMut<SpellMap>,
) {
    // A closed gate reads as every button released, so no edges can fire
    let enabled = match_state.input_enabled();

    for player in PlayerIndex::ALL {
        let keys = &KEY_MAPS[player.index()];

        let axis = if enabled {
            read_axis(&keyboard, keys)
        } else {
            Vec2::ZERO
        };
        inputs.set(player, PlayerInput { axis });

        for kind in SpellKind::ALL {
            let held = enabled && keyboard.any_pressed(keys.spell_keys(kind).iter().copied());
            spells.press(player, kind, held);
        }
    }
}

pub(crate) fn tick_spell_cooldowns(time: Res<Time>, mut spells: ResMut<SpellMap>) {
    spells.tick(time.delta_secs());
}
