//! Core domain: player identity, match flow and the round coordinator.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::splash::tick_splash;
use crate::stats::apply_damage;

pub use events::{LastWordEvent, MatchEndedEvent, NewMatchEvent, PlayerDeathEvent};
pub use resources::{ArenaActors, PlayerIndex};
pub use state::{MatchState, round_active};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaActors>()
            .init_resource::<MatchState>()
            .add_message::<PlayerDeathEvent>()
            .add_message::<LastWordEvent>()
            .add_message::<MatchEndedEvent>()
            .add_message::<NewMatchEvent>()
            .add_systems(Startup, systems::start_first_match)
            .add_systems(
                Update,
                (
                    systems::handle_player_death,
                    systems::handle_last_word,
                    systems::handle_splash_finished,
                    systems::handle_new_match,
                )
                    .chain()
                    .after(tick_splash)
                    .after(apply_damage),
            );
    }
}
