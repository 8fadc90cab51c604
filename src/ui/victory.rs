//! UI domain: match victory screen and the new-match prompt.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::MatchConfig;
use crate::core::{MatchEndedEvent, MatchState, NewMatchEvent, PlayerIndex};

/// Marker for victory screen UI root
#[derive(Component, Debug)]
pub struct VictoryScreenUI;

pub(crate) fn spawn_victory_screen(
    mut commands: Commands,
    mut match_ended: MessageReader<MatchEndedEvent>,
    config: Res<MatchConfig>,
    match_state: Res<MatchState>,
    existing: Query<(), With<VictoryScreenUI>>,
) {
    let Some(event) = match_ended.read().last() else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    let bg_color = Color::srgba(0.02, 0.05, 0.1, 0.9);
    let title_color = Color::srgb(0.95, 0.85, 0.3);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    let winner = event.winner;
    let character = config.character(winner);

    commands
        .spawn((
            VictoryScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("VICTORY"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("(P{}) {} takes the match", winner.number(), character.name())),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(character.portrait_color()),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            // Final score
            parent.spawn((
                Text::new(format!(
                    "{} - {}",
                    match_state.score(PlayerIndex::ONE),
                    match_state.score(PlayerIndex::TWO)
                )),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press ENTER to start a new match"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn handle_victory_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    screens: Query<Entity, With<VictoryScreenUI>>,
    mut new_match: MessageWriter<NewMatchEvent>,
) {
    if screens.is_empty() {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        for entity in screens.iter() {
            commands.entity(entity).despawn();
        }
        info!("Starting a new match");
        new_match.write(NewMatchEvent);
    }
}
