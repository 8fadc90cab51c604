//! Stats domain: per-player health, shields and death notification.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::MatchConfig;
use crate::core::{PlayerDeathEvent, PlayerIndex, round_active};

/// Health pool for one player
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

#[derive(Debug, Clone)]
struct PlayerVitals {
    health: Health,
    shielded: bool,
    /// Set once the death notification has been raised for this round
    dead: bool,
}

impl PlayerVitals {
    fn new(max_health: f32) -> Self {
        Self {
            health: Health::new(max_health),
            shielded: false,
            dead: false,
        }
    }
}

/// Tracks health and death for both players across a round.
#[derive(Resource, Debug)]
pub struct PlayerStats {
    max_health: f32,
    players: [PlayerVitals; 2],
}

impl FromWorld for PlayerStats {
    fn from_world(world: &mut World) -> Self {
        let max_health = world
            .get_resource::<MatchConfig>()
            .map(|config| config.max_health)
            .unwrap_or(MatchConfig::default().max_health);
        Self::new(max_health)
    }
}

impl PlayerStats {
    pub fn new(max_health: f32) -> Self {
        Self {
            max_health,
            players: [
                PlayerVitals::new(max_health),
                PlayerVitals::new(max_health),
            ],
        }
    }

    /// Reset both players for a new round
    pub fn start(&mut self) {
        self.players = [
            PlayerVitals::new(self.max_health),
            PlayerVitals::new(self.max_health),
        ];
    }

    pub fn health(&self, player: PlayerIndex) -> &Health {
        &self.players[player.index()].health
    }

    pub fn is_dead(&self, player: PlayerIndex) -> bool {
        self.players[player.index()].dead
    }

    pub fn is_shielded(&self, player: PlayerIndex) -> bool {
        self.players[player.index()].shielded
    }

    pub fn set_shielded(&mut self, player: PlayerIndex, shielded: bool) {
        self.players[player.index()].shielded = shielded;
    }

    /// Apply damage and return true if this hit killed the player.
    /// Shielded and already-dead players take no damage.
    pub fn apply_damage(&mut self, player: PlayerIndex, amount: f32) -> bool {
        let vitals = &mut self.players[player.index()];
        if vitals.dead || vitals.shielded {
            return false;
        }

        vitals.health.take_damage(amount);
        if vitals.health.is_dead() {
            vitals.dead = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: PlayerIndex,
    pub amount: f32,
}

impl Message for DamageEvent {}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut stats: ResMut<PlayerStats>,
    mut death_events: MessageWriter<PlayerDeathEvent>,
) {
    for event in damage_events.read() {
        if stats.apply_damage(event.target, event.amount) {
            info!("{} was defeated", event.target);
            death_events.write(PlayerDeathEvent {
                player: event.target,
            });
        } else {
            debug!(
                "{} took {} damage, {} left",
                event.target,
                event.amount,
                stats.health(event.target).current
            );
        }
    }
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerStats>()
            .add_message::<DamageEvent>()
            .add_systems(Update, apply_damage.run_if(round_active));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lethal_damage_reports_death_once() {
        let mut stats = PlayerStats::new(50.0);

        assert!(!stats.apply_damage(PlayerIndex::ONE, 30.0));
        assert!(stats.apply_damage(PlayerIndex::ONE, 30.0));
        assert!(stats.is_dead(PlayerIndex::ONE));
        assert_eq!(stats.health(PlayerIndex::ONE).current, 0.0);

        // Further hits on a dead player never raise another death
        assert!(!stats.apply_damage(PlayerIndex::ONE, 30.0));
        assert!(!stats.is_dead(PlayerIndex::TWO));
    }

    #[test]
    fn test_shield_blocks_damage() {
        let mut stats = PlayerStats::new(10.0);
        stats.set_shielded(PlayerIndex::TWO, true);

        assert!(!stats.apply_damage(PlayerIndex::TWO, 100.0));
        assert_eq!(stats.health(PlayerIndex::TWO).percent(), 1.0);

        stats.set_shielded(PlayerIndex::TWO, false);
        assert!(stats.apply_damage(PlayerIndex::TWO, 100.0));
    }

    #[test]
    fn test_start_resets_both_players() {
        let mut stats = PlayerStats::new(10.0);
        stats.apply_damage(PlayerIndex::ONE, 10.0);
        stats.set_shielded(PlayerIndex::TWO, true);

        stats.start();

        for player in PlayerIndex::ALL {
            assert!(!stats.is_dead(player));
            assert!(!stats.is_shielded(player));
            assert_eq!(stats.health(player).current, 10.0);
        }
    }
}
