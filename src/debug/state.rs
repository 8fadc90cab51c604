//! Debug domain: debug state resource.

use bevy::prelude::*;

/// Damage dealt by the F1/F2 hotkeys
pub const DEBUG_DAMAGE: f32 = 25.0;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show debug info overlay (states, health, cooldowns)
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub(crate) fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_fades() {
        let mut state = DebugState::default();
        state.set_message("Skipped splash", 1.0);

        state.tick_message(0.5);
        assert!(state.status_message.is_some());

        state.tick_message(0.6);
        assert!(state.status_message.is_none());
    }
}
