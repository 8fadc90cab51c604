//! UI domain: camera, score HUD, splash overlay and victory screen.

mod hud_score;
mod splash;
mod victory;

use bevy::prelude::*;

use crate::ui::hud_score::{spawn_score_panels, update_health_bars, update_score_labels};
use crate::ui::splash::{spawn_splash_overlay, update_splash_overlay};
use crate::ui::victory::{handle_victory_input, spawn_victory_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_camera, spawn_score_panels, spawn_splash_overlay),
        )
        .add_systems(
            Update,
            (
                update_score_labels,
                update_health_bars,
                update_splash_overlay,
                spawn_victory_screen,
                handle_victory_input,
            ),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[cfg(test)]
mod tests {
    use super::hud_score::score_label_text;

    #[test]
    fn test_score_label_text() {
        assert_eq!(score_label_text(2, 3), "Wins: 2 / 3");
    }
}
