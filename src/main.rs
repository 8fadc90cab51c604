mod character;
mod content;
mod controls;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod splash;
mod stats;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Duel Arena".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        // Content first: every other plugin reads MatchConfig
        .add_plugins(content::ContentPlugin)
        .add_plugins((
            controls::ControlsPlugin,
            stats::StatsPlugin,
            splash::SplashPlugin,
            core::CorePlugin,
            character::CharacterPlugin,
            ui::UiPlugin,
        ))
        .add_plugins(debug_plugins)
        .run();
}

#[cfg(feature = "dev-tools")]
fn debug_plugins(app: &mut App) {
    app.add_plugins(debug::DebugPlugin);
}

#[cfg(not(feature = "dev-tools"))]
fn debug_plugins(_app: &mut App) {}
