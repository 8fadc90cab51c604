//! Debug domain: dev-only hotkeys and an info overlay for fast iteration.
//!
//! Features:
//! - Deal damage to either player
//! - Skip the splash on screen
//! - Toggle an overlay with states, health and cooldowns

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_status_message).chain())
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
