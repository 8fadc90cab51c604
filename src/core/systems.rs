//! Core domain: match coordinator systems for rounds, scoring and victory.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::character::{Targeting, spawn_character};
use crate::content::{CharacterType, MatchConfig};
use crate::controls::SpellMap;
use crate::core::events::{LastWordEvent, MatchEndedEvent, NewMatchEvent, PlayerDeathEvent};
use crate::core::resources::{ArenaActors, PlayerIndex};
use crate::core::state::{MatchPhase, MatchState};
use crate::splash::{SplashContinuation, SplashFinishedEvent, SplashText};
use crate::stats::PlayerStats;

/// Splash text announcing the winner of a round
pub(crate) fn victory_text(winner: PlayerIndex, character: CharacterType) -> String {
    format!("(P{}) {} wins!", winner.number(), character.name())
}

/// Everything needed to tear down and rebuild the arena for a round.
#[derive(SystemParam)]
pub(crate) struct RoundSetup<'w, 's> {
    commands: Commands<'w, 's>,
    config: Res<'w, MatchConfig>,
    arena: ResMut<'w, ArenaActors>,
    match_state: ResMut<'w, MatchState>,
    stats: ResMut<'w, PlayerStats>,
    spells: ResMut<'w, SpellMap>,
    splash: ResMut<'w, SplashText>,
}

impl RoundSetup<'_, '_> {
    fn start_match(&mut self) {
        // Continuations from the previous match must not run in this one
        self.splash.clear();
        self.match_state.start_match();
        info!(
            "Match started: {} vs {}, first to {}",
            self.config.character(PlayerIndex::ONE).name(),
            self.config.character(PlayerIndex::TWO).name(),
            self.config.wins_needed
        );
        self.reset_arena();
    }

    fn reset_arena(&mut self) {
        self.stats.start();
        self.spells.reset_all_cooldowns();

        for entity in self.arena.take_all() {
            self.commands.entity(entity).despawn();
        }

        let [first, second] = PlayerIndex::ALL.map(|player| {
            spawn_character(
                &mut self.commands,
                &self.config,
                player,
                &mut self.spells,
                &mut self.stats,
            )
        });

        self.commands.entity(first).insert(Targeting {
            target: Some(second),
        });
        self.commands.entity(second).insert(Targeting {
            target: Some(first),
        });
        self.arena.set(PlayerIndex::ONE, first);
        self.arena.set(PlayerIndex::TWO, second);

        // Input stays locked until the round-start splash has finished
        let round = self.match_state.begin_round();
        self.splash.splash(
            self.config.round_start_text.clone(),
            SplashContinuation::EnableInput,
        );

        info!("Round {} starting", round);
    }
}

pub(crate) fn start_first_match(mut round: RoundSetup) {
    round.start_match();
}

pub(crate) fn handle_new_match(mut events: MessageReader<NewMatchEvent>, mut round: RoundSetup) {
    if events.read().count() == 0 {
        return;
    }

    if round.match_state.phase() != MatchPhase::MatchEnded {
        warn!(
            "Ignoring new match request during {:?}",
            round.match_state.phase()
        );
        return;
    }
    round.start_match();
}

pub(crate) fn handle_player_death(
    mut deaths: MessageReader<PlayerDeathEvent>,
    config: Res<MatchConfig>,
    mut match_state: ResMut<MatchState>,
    mut splash: ResMut<SplashText>,
) {
    for event in deaths.read() {
        let Some(outcome) = match_state.record_death(event.player, config.wins_needed) else {
            warn!(
                "Ignoring death of {} during {:?}",
                event.player,
                match_state.phase()
            );
            continue;
        };

        let text = victory_text(outcome.winner, config.character(outcome.winner));
        info!(
            "Round {} won by {}, score {}-{}",
            match_state.round(),
            outcome.winner,
            match_state.score(PlayerIndex::ONE),
            match_state.score(PlayerIndex::TWO)
        );

        let continuation = if outcome.match_won {
            SplashContinuation::MatchEnded {
                winner: outcome.winner,
            }
        } else {
            SplashContinuation::ResetArena
        };
        splash.splash(text, continuation);
    }
}

pub(crate) fn handle_last_word(
    mut events: MessageReader<LastWordEvent>,
    mut match_state: ResMut<MatchState>,
    mut splash: ResMut<SplashText>,
) {
    for event in events.read() {
        if match_state.claim_last_word(event.player) {
            info!("{} casts Last Word", event.player);
            splash.splash(
                format!("(P{}) Last Word!", event.player.number()),
                SplashContinuation::None,
            );
        } else {
            warn!(
                "Ignoring Last Word from {} during {:?}, already cast by {:?}",
                event.player,
                match_state.phase(),
                match_state.last_word()
            );
        }
    }
}

pub(crate) fn handle_splash_finished(
    mut finished: MessageReader<SplashFinishedEvent>,
    mut round: RoundSetup,
    mut match_ended: MessageWriter<MatchEndedEvent>,
) {
    for event in finished.read() {
        match event.continuation {
            SplashContinuation::None => {}
            SplashContinuation::EnableInput => {
                if round.match_state.enable_input() {
                    info!("Round {} is live", round.match_state.round());
                } else {
                    warn!(
                        "Round-start splash finished during {:?}, input left as is",
                        round.match_state.phase()
                    );
                }
            }
            SplashContinuation::ResetArena => round.reset_arena(),
            SplashContinuation::MatchEnded { winner } => {
                round.match_state.end_match();
                info!(
                    "Match won by {} ({})",
                    winner,
                    round.config.character(winner).name()
                );
                match_ended.write(MatchEndedEvent { winner });
            }
        }
    }
}
