//! Data definitions for the match configuration file.
//!
//! These structs mirror the structure in assets/data/match.ron and are used
//! for deserialization. Every field has a default so a partial file is valid.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::PlayerIndex;

// ============================================================================
// Character roster
// ============================================================================

/// Playable characters. The match config picks one per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect)]
pub enum CharacterType {
    #[default]
    Rhea,
}

impl CharacterType {
    /// Display name used in splash text and the score HUD
    pub fn name(&self) -> &'static str {
        match self {
            CharacterType::Rhea => "Rhea",
        }
    }

    /// Flat colour used for the HUD portrait and the actor sprite
    pub fn portrait_color(&self) -> Color {
        match self {
            CharacterType::Rhea => Color::srgb(0.55, 0.75, 0.95),
        }
    }

    pub fn tuning(&self) -> CharacterTuning {
        match self {
            CharacterType::Rhea => CharacterTuning::default(),
        }
    }
}

/// Per-character movement and ability tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub shield_time: f32,
    /// Maximum distance the placement circle may sit from the caster
    pub circle_range: f32,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            accel: 3000.0,
            decel: 2600.0,
            dash_speed: 900.0,
            dash_time: 0.16,
            shield_time: 0.6,
            circle_range: 240.0,
        }
    }
}

// ============================================================================
// Match configuration (match.ron)
// ============================================================================

/// Cooldown in seconds for each spell slot
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SpellCooldowns {
    pub intrinsic: f32,
    pub primary: f32,
    pub movement: f32,
}

impl Default for SpellCooldowns {
    fn default() -> Self {
        Self {
            intrinsic: 3.0,
            primary: 10.0,
            movement: 1.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MatchConfig {
    /// Round wins required to take the match
    pub wins_needed: u32,
    pub round_start_text: String,
    /// How long each splash message stays on screen
    pub splash_seconds: f32,
    pub player_characters: [CharacterType; 2],
    pub spawn_points: [[f32; 2]; 2],
    pub max_health: f32,
    pub spell_cooldowns: SpellCooldowns,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            wins_needed: 3,
            round_start_text: "Get em'!".to_string(),
            splash_seconds: 1.5,
            player_characters: [CharacterType::Rhea, CharacterType::Rhea],
            spawn_points: [[-300.0, 0.0], [300.0, 0.0]],
            max_health: 100.0,
            spell_cooldowns: SpellCooldowns::default(),
        }
    }
}

impl MatchConfig {
    pub fn character(&self, player: PlayerIndex) -> CharacterType {
        self.player_characters[player.index()]
    }

    pub fn spawn_point(&self, player: PlayerIndex) -> Vec2 {
        let [x, y] = self.spawn_points[player.index()];
        Vec2::new(x, y)
    }
}
