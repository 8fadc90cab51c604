//! UI domain: centered overlay for the active splash message.

use bevy::prelude::*;

use crate::splash::SplashText;

/// Root of the splash overlay, hidden while no splash is on screen
#[derive(Component, Debug)]
pub struct SplashOverlay;

#[derive(Component, Debug)]
pub struct SplashLabel;

pub(crate) fn spawn_splash_overlay(mut commands: Commands) {
    commands
        .spawn((
            SplashOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                display: Display::None,
                ..default()
            },
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                SplashLabel,
                Text::new(""),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
            ));
        });
}

pub(crate) fn update_splash_overlay(
    splash: Res<SplashText>,
    mut overlay: Query<&mut Node, With<SplashOverlay>>,
    mut label: Query<&mut Text, With<SplashLabel>>,
) {
    if !splash.is_changed() {
        return;
    }

    let current = splash.current_text();
    for mut node in &mut overlay {
        node.display = if current.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }

    if let Some(current) = current {
        for mut text in &mut label {
            if text.0 != current {
                text.0 = current.to_string();
            }
        }
    }
}
