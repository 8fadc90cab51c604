//! UI domain: per-player score panels with portrait, name, wins and health.

use bevy::prelude::*;

use crate::content::MatchConfig;
use crate::core::{MatchState, PlayerIndex};
use crate::stats::PlayerStats;

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 14.0;
pub(crate) const PANEL_PADDING: f32 = 16.0;
const PORTRAIT_SIZE: f32 = 48.0;

/// Text showing a player's round wins
#[derive(Component, Debug)]
pub struct ScoreLabel {
    pub player: PlayerIndex,
}

/// Fill element of a player's health bar
#[derive(Component, Debug)]
pub struct HealthBarFill {
    pub player: PlayerIndex,
}

pub(crate) fn score_label_text(score: u32, wins_needed: u32) -> String {
    format!("Wins: {} / {}", score, wins_needed)
}

pub(crate) fn spawn_score_panels(mut commands: Commands, config: Res<MatchConfig>) {
    for player in PlayerIndex::ALL {
        let character = config.character(player);

        // P1 on the left edge, P2 mirrored on the right
        let mut panel = Node {
            position_type: PositionType::Absolute,
            top: Val::Px(PANEL_PADDING),
            column_gap: Val::Px(10.0),
            align_items: AlignItems::Center,
            ..default()
        };
        if player == PlayerIndex::ONE {
            panel.left = Val::Px(PANEL_PADDING);
            panel.flex_direction = FlexDirection::Row;
        } else {
            panel.right = Val::Px(PANEL_PADDING);
            panel.flex_direction = FlexDirection::RowReverse;
        }

        commands
            .spawn((Name::new(format!("{} score panel", player)), panel))
            .with_children(|parent| {
                // Portrait
                parent.spawn((
                    Node {
                        width: Val::Px(PORTRAIT_SIZE),
                        height: Val::Px(PORTRAIT_SIZE),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(character.portrait_color()),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ));

                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(4.0),
                        ..default()
                    })
                    .with_children(|column| {
                        column.spawn((
                            Text::new(format!("(P{}) {}", player.number(), character.name())),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.9, 0.9, 0.9)),
                        ));

                        column.spawn((
                            ScoreLabel { player },
                            Text::new(score_label_text(0, config.wins_needed)),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.95, 0.85, 0.3)),
                        ));

                        column
                            .spawn((
                                Node {
                                    width: Val::Px(HEALTHBAR_WIDTH),
                                    height: Val::Px(HEALTHBAR_HEIGHT),
                                    border: UiRect::all(Val::Px(2.0)),
                                    ..default()
                                },
                                BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                                BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                            ))
                            .with_children(|bar| {
                                bar.spawn((
                                    HealthBarFill { player },
                                    Node {
                                        width: Val::Percent(100.0),
                                        height: Val::Percent(100.0),
                                        ..default()
                                    },
                                    BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                                ));
                            });
                    });
            });
    }
}

pub(crate) fn update_score_labels(
    match_state: Res<MatchState>,
    config: Res<MatchConfig>,
    mut labels: Query<(&ScoreLabel, &mut Text)>,
) {
    if !match_state.is_changed() {
        return;
    }

    for (label, mut text) in &mut labels {
        text.0 = score_label_text(match_state.score(label.player), config.wins_needed);
    }
}

pub(crate) fn update_health_bars(
    stats: Res<PlayerStats>,
    mut fills: Query<(&HealthBarFill, &mut Node, &mut BackgroundColor)>,
) {
    if !stats.is_changed() {
        return;
    }

    for (fill, mut node, mut bg_color) in &mut fills {
        let percent = stats.health(fill.player).percent().clamp(0.0, 1.0);
        node.width = Val::Percent(percent * 100.0);

        // Color gradient: green -> yellow -> red, blue while shielded
        bg_color.0 = if stats.is_shielded(fill.player) {
            Color::srgb(0.4, 0.6, 1.0)
        } else if percent > 0.5 {
            let t = (percent - 0.5) * 2.0;
            Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
        } else {
            let t = percent * 2.0;
            Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
        };
    }
}
