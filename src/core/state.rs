//! Core domain: match phase, scores and the input gate.

use bevy::prelude::*;

use crate::core::PlayerIndex;

/// Lifecycle of a match.
///
/// `RoundStarting -> RoundActive -> RoundEnding -> RoundStarting` repeats
/// until a round win reaches the threshold, then `RoundEnding -> MatchEnded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchPhase {
    #[default]
    RoundStarting,
    RoundActive,
    RoundEnding,
    MatchEnded,
}

/// Round wins per player for the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    scores: [u32; 2],
}

impl Scoreboard {
    pub fn get(&self, player: PlayerIndex) -> u32 {
        self.scores[player.index()]
    }

    /// Add one round win and return the new score
    pub fn award(&mut self, player: PlayerIndex) -> u32 {
        let score = &mut self.scores[player.index()];
        *score += 1;
        *score
    }

    pub fn reset(&mut self) {
        self.scores = [0; 2];
    }
}

/// Result of a round ending in a death
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: PlayerIndex,
    pub winner_score: u32,
    /// Winner has reached the configured number of wins
    pub match_won: bool,
}

#[derive(Resource, Debug, Default)]
pub struct MatchState {
    phase: MatchPhase,
    scoreboard: Scoreboard,
    input_enabled: bool,
    round: u32,
    last_word: Option<PlayerIndex>,
}

impl MatchState {
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self, player: PlayerIndex) -> u32 {
        self.scoreboard.get(player)
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// 1-based number of the current round, 0 before the first round
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_word(&self) -> Option<PlayerIndex> {
        self.last_word
    }

    /// Reset for a new match. Scores only ever reset here.
    pub fn start_match(&mut self) {
        self.scoreboard.reset();
        self.phase = MatchPhase::RoundStarting;
        self.input_enabled = false;
        self.round = 0;
        self.last_word = None;
    }

    /// Enter the round-start splash with input locked. Returns the round number.
    pub fn begin_round(&mut self) -> u32 {
        self.phase = MatchPhase::RoundStarting;
        self.input_enabled = false;
        self.last_word = None;
        self.round += 1;
        self.round
    }

    /// Open the input gate once the round-start splash has finished.
    /// Returns false (and changes nothing) unless a round is starting.
    pub fn enable_input(&mut self) -> bool {
        if self.phase != MatchPhase::RoundStarting || self.input_enabled {
            return false;
        }
        self.input_enabled = true;
        self.phase = MatchPhase::RoundActive;
        true
    }

    /// Score a death for the surviving player and lock input.
    ///
    /// Deaths are only counted while a round is active; the first death of a
    /// round decides it and later ones are ignored.
    pub fn record_death(&mut self, dead: PlayerIndex, wins_needed: u32) -> Option<RoundOutcome> {
        if self.phase != MatchPhase::RoundActive {
            return None;
        }

        let winner = dead.opponent();
        let winner_score = self.scoreboard.award(winner);
        self.input_enabled = false;
        self.phase = MatchPhase::RoundEnding;

        Some(RoundOutcome {
            winner,
            winner_score,
            match_won: winner_score >= wins_needed,
        })
    }

    pub fn end_match(&mut self) {
        self.phase = MatchPhase::MatchEnded;
        self.input_enabled = false;
    }

    /// Claim this round's Last Word for `player`. Only one per round.
    pub fn claim_last_word(&mut self, player: PlayerIndex) -> bool {
        if self.phase != MatchPhase::RoundActive || self.last_word.is_some() {
            return false;
        }
        self.last_word = Some(player);
        true
    }
}

/// Run condition: true only while a round is being fought
pub fn round_active(match_state: Res<MatchState>) -> bool {
    match_state.phase() == MatchPhase::RoundActive
}
