//! Controls domain: per-player spell edges and cooldowns.

use bevy::prelude::*;

use crate::content::{MatchConfig, SpellCooldowns};
use crate::core::PlayerIndex;

/// Ability slots every character has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellKind {
    /// Defensive ability (Rhea: shield)
    Intrinsic,
    /// Ultimate cast (Rhea: Last Word)
    Primary,
    /// Movement ability (Rhea: dash)
    Movement,
}

impl SpellKind {
    pub const ALL: [SpellKind; 3] = [SpellKind::Intrinsic, SpellKind::Primary, SpellKind::Movement];

    fn slot(self) -> usize {
        match self {
            SpellKind::Intrinsic => 0,
            SpellKind::Primary => 1,
            SpellKind::Movement => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SpellSlot {
    held: bool,
    /// Released -> pressed this frame and not yet consumed
    down: bool,
    cooldown: f32,
}

/// Tracks spell availability and "just pressed" edges for both players.
#[derive(Resource, Debug)]
pub struct SpellMap {
    slots: [[SpellSlot; 3]; 2],
    cooldowns: SpellCooldowns,
}

impl FromWorld for SpellMap {
    fn from_world(world: &mut World) -> Self {
        let cooldowns = world
            .get_resource::<MatchConfig>()
            .map(|config| config.spell_cooldowns)
            .unwrap_or_default();
        Self::new(cooldowns)
    }
}

impl SpellMap {
    pub fn new(cooldowns: SpellCooldowns) -> Self {
        Self {
            slots: [[SpellSlot::default(); 3]; 2],
            cooldowns,
        }
    }

    fn slot_mut(&mut self, player: PlayerIndex, kind: SpellKind) -> &mut SpellSlot {
        &mut self.slots[player.index()][kind.slot()]
    }

    fn slot(&self, player: PlayerIndex, kind: SpellKind) -> &SpellSlot {
        &self.slots[player.index()][kind.slot()]
    }

    /// Feed the raw button state for this frame.
    pub fn press(&mut self, player: PlayerIndex, kind: SpellKind, held: bool) {
        let slot = self.slot_mut(player, kind);
        slot.down = held && !slot.held;
        slot.held = held;
    }

    /// True on the frame the spell button goes down while the spell is ready.
    /// Consumes the edge, so asking again in the same frame returns false.
    pub fn get_spell_down(&mut self, player: PlayerIndex, kind: SpellKind) -> bool {
        if !self.is_ready(player, kind) {
            return false;
        }
        let slot = self.slot_mut(player, kind);
        if slot.down {
            slot.down = false;
            debug!("{} cast {:?}", player, kind);
            return true;
        }
        false
    }

    pub fn is_ready(&self, player: PlayerIndex, kind: SpellKind) -> bool {
        self.slot(player, kind).cooldown <= 0.0
    }

    pub fn cooldown_remaining(&self, player: PlayerIndex, kind: SpellKind) -> f32 {
        self.slot(player, kind).cooldown.max(0.0)
    }

    pub fn cooldown_duration(&self, kind: SpellKind) -> f32 {
        match kind {
            SpellKind::Intrinsic => self.cooldowns.intrinsic,
            SpellKind::Primary => self.cooldowns.primary,
            SpellKind::Movement => self.cooldowns.movement,
        }
    }

    pub fn start_cooldown(&mut self, player: PlayerIndex, kind: SpellKind) {
        let duration = self.cooldown_duration(kind);
        self.slot_mut(player, kind).cooldown = duration;
    }

    pub fn tick(&mut self, dt: f32) {
        for slot in self.slots.iter_mut().flatten() {
            if slot.cooldown > 0.0 {
                slot.cooldown -= dt;
            }
        }
    }

    /// Make every spell available again and drop unconsumed edges.
    /// Held state is kept so a button held across a reset does not re-fire.
    pub fn reset_all_cooldowns(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.cooldown = 0.0;
            slot.down = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_down_only_on_press_edge() {
        let mut spells = SpellMap::new(SpellCooldowns::default());
        let player = PlayerIndex::ONE;

        spells.press(player, SpellKind::Movement, true);
        assert!(spells.get_spell_down(player, SpellKind::Movement));

        // Still held next frame: no new edge
        spells.press(player, SpellKind::Movement, true);
        assert!(!spells.get_spell_down(player, SpellKind::Movement));

        spells.press(player, SpellKind::Movement, false);
        spells.press(player, SpellKind::Movement, true);
        assert!(spells.get_spell_down(player, SpellKind::Movement));
    }

    #[test]
    fn test_spell_down_consumes_edge() {
        let mut spells = SpellMap::new(SpellCooldowns::default());
        spells.press(PlayerIndex::TWO, SpellKind::Intrinsic, true);

        assert!(spells.get_spell_down(PlayerIndex::TWO, SpellKind::Intrinsic));
        assert!(!spells.get_spell_down(PlayerIndex::TWO, SpellKind::Intrinsic));
        assert!(!spells.get_spell_down(PlayerIndex::ONE, SpellKind::Intrinsic));
    }

    #[test]
    fn test_cooldown_blocks_until_expired() {
        let mut spells = SpellMap::new(SpellCooldowns {
            intrinsic: 1.0,
            primary: 1.0,
            movement: 1.0,
        });
        let player = PlayerIndex::ONE;
        spells.start_cooldown(player, SpellKind::Primary);
        assert!(!spells.is_ready(player, SpellKind::Primary));

        spells.press(player, SpellKind::Primary, true);
        assert!(!spells.get_spell_down(player, SpellKind::Primary));

        spells.tick(0.5);
        assert!((spells.cooldown_remaining(player, SpellKind::Primary) - 0.5).abs() < 1e-5);

        spells.tick(0.6);
        spells.press(player, SpellKind::Primary, false);
        spells.press(player, SpellKind::Primary, true);
        assert!(spells.get_spell_down(player, SpellKind::Primary));
    }

    #[test]
    fn test_reset_all_cooldowns() {
        let mut spells = SpellMap::new(SpellCooldowns::default());
        for player in PlayerIndex::ALL {
            for kind in SpellKind::ALL {
                spells.start_cooldown(player, kind);
            }
        }
        spells.press(PlayerIndex::ONE, SpellKind::Movement, true);

        spells.reset_all_cooldowns();

        for player in PlayerIndex::ALL {
            for kind in SpellKind::ALL {
                assert!(spells.is_ready(player, kind));
            }
        }
        // The pending edge was dropped and the held button does not re-fire
        assert!(!spells.get_spell_down(PlayerIndex::ONE, SpellKind::Movement));
        spells.press(PlayerIndex::ONE, SpellKind::Movement, true);
        assert!(!spells.get_spell_down(PlayerIndex::ONE, SpellKind::Movement));
    }
}
