//! Content domain: tests for match config parsing and validation.

use super::loader::parse_match_config;
use super::{CharacterType, ConfigLoadError, MatchConfig, load_match_config, validate_match_config};
use crate::core::PlayerIndex;
use bevy::prelude::Vec2;
use std::path::Path;

#[test]
fn test_default_config_is_valid() {
    let config = MatchConfig::default();
    assert!(validate_match_config(&config).is_empty());
    assert_eq!(config.wins_needed, 3);
    assert_eq!(config.round_start_text, "Get em'!");
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = parse_match_config("(wins_needed: 5)", "inline").unwrap();
    assert_eq!(config.wins_needed, 5);
    assert_eq!(config.splash_seconds, MatchConfig::default().splash_seconds);
    assert_eq!(config.player_characters, [CharacterType::Rhea; 2]);
}

#[test]
fn test_parse_full_config() {
    let source = r#"(
        wins_needed: 2,
        round_start_text: "Fight!",
        splash_seconds: 0.5,
        player_characters: (Rhea, Rhea),
        spawn_points: ((-100.0, 10.0), (100.0, 10.0)),
        max_health: 50.0,
        spell_cooldowns: (intrinsic: 1.0, primary: 2.0, movement: 0.5),
    )"#;
    let config = parse_match_config(source, "inline").unwrap();

    assert_eq!(config.wins_needed, 2);
    assert_eq!(config.round_start_text, "Fight!");
    assert_eq!(config.spawn_point(PlayerIndex::ONE), Vec2::new(-100.0, 10.0));
    assert_eq!(config.spawn_point(PlayerIndex::TWO), Vec2::new(100.0, 10.0));
    assert_eq!(config.spell_cooldowns.movement, 0.5);
    assert!(validate_match_config(&config).is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_match_config("(wins_needed: \"three\")", "match.ron").unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
    assert!(err.to_string().contains("match.ron"));
}

#[test]
fn test_missing_file_is_reported_as_missing() {
    let err = load_match_config(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Missing { .. }));
}

#[test]
fn test_validation_collects_every_problem() {
    let mut config = MatchConfig {
        wins_needed: 0,
        splash_seconds: 0.0,
        ..MatchConfig::default()
    };
    config.spell_cooldowns.primary = -1.0;
    config.spawn_points = [[0.0, 0.0], [0.0, 0.0]];

    let errors = validate_match_config(&config);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&"wins_needed"));
    assert!(fields.contains(&"splash_seconds"));
    assert!(fields.contains(&"spell_cooldowns.primary"));
    assert!(fields.contains(&"spawn_points"));
}

#[test]
fn test_shipped_config_is_valid() {
    let config = load_match_config(Path::new(super::MATCH_CONFIG_PATH)).unwrap();
    assert!(validate_match_config(&config).is_empty());
}
