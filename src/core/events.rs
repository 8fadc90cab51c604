//! Core domain: events for the round and match flow.

use bevy::ecs::message::Message;

use crate::core::PlayerIndex;

/// Event fired by the stats tracker when a player's health reaches zero
#[derive(Debug, Clone, Copy)]
pub struct PlayerDeathEvent {
    pub player: PlayerIndex,
}

impl Message for PlayerDeathEvent {}

/// Event fired when a player casts their Last Word
#[derive(Debug, Clone, Copy)]
pub struct LastWordEvent {
    pub player: PlayerIndex,
}

impl Message for LastWordEvent {}

/// Event fired once the winning splash of the final round has finished
#[derive(Debug, Clone, Copy)]
pub struct MatchEndedEvent {
    pub winner: PlayerIndex,
}

impl Message for MatchEndedEvent {}

/// Request to start a fresh match (scores back to zero)
#[derive(Debug, Clone, Copy)]
pub struct NewMatchEvent;

impl Message for NewMatchEvent {}
