use std::time::Duration;

use bevy::ecs::message::{MessageReader, Messages};
use bevy::prelude::*;

use super::state::MatchPhase;
use super::*;
use crate::character::{CharacterPlugin, Targeting};
use crate::content::{MatchConfig, SpellCooldowns};
use crate::controls::{ControlsPlugin, SpellKind, SpellMap};
use crate::splash::{SplashContinuation, SplashPlugin, SplashText};
use crate::stats::{DamageEvent, PlayerStats, StatsPlugin};

#[derive(Resource, Default)]
struct MatchEndings(Vec<PlayerIndex>);

fn collect_match_endings(
    mut reader: MessageReader<MatchEndedEvent>,
    mut endings: ResMut<MatchEndings>,
) {
    endings.0.extend(reader.read().map(|event| event.winner));
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(MatchConfig::default())
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<MatchEndings>()
        .add_plugins((
            ControlsPlugin,
            StatsPlugin,
            SplashPlugin,
            CorePlugin,
            CharacterPlugin,
        ))
        .add_systems(
            Update,
            collect_match_endings.after(systems::handle_splash_finished),
        );
    app.update();
    app
}

fn write<M: bevy::ecs::message::Message>(app: &mut App, message: M) {
    app.world_mut().resource_mut::<Messages<M>>().write(message);
}

/// Finish the splash on screen without waiting for its timer.
fn finish_splash(app: &mut App) {
    let finished = app
        .world_mut()
        .resource_mut::<SplashText>()
        .complete_current()
        .expect("a splash should be on screen");
    write(app, finished);
    app.update();
}

fn kill(app: &mut App, player: PlayerIndex) {
    write(
        app,
        DamageEvent {
            target: player,
            amount: 1_000.0,
        },
    );
    app.update();
}

fn match_state(app: &App) -> &MatchState {
    app.world().resource::<MatchState>()
}

fn splash_text(app: &App) -> Option<String> {
    app.world()
        .resource::<SplashText>()
        .current_text()
        .map(str::to_owned)
}

fn actors(app: &App) -> [Entity; 2] {
    let arena = app.world().resource::<ArenaActors>();
    PlayerIndex::ALL.map(|player| arena.get(player).expect("actor spawned"))
}

#[test]
fn test_match_state_enable_input_only_from_round_start() {
    let mut state = MatchState::default();
    state.start_match();
    assert_eq!(state.begin_round(), 1);
    assert!(!state.input_enabled());

    assert!(state.enable_input());
    assert!(state.input_enabled());
    assert_eq!(state.phase(), MatchPhase::RoundActive);

    // Second call is a no-op
    assert!(!state.enable_input());
    assert_eq!(state.phase(), MatchPhase::RoundActive);
}

#[test]
fn test_record_death_awards_opponent_and_locks_input() {
    let mut state = MatchState::default();
    state.start_match();
    state.begin_round();
    state.enable_input();

    let outcome = state.record_death(PlayerIndex::ONE, 3).expect("round active");
    assert_eq!(outcome.winner, PlayerIndex::TWO);
    assert_eq!(outcome.winner_score, 1);
    assert!(!outcome.match_won);
    assert!(!state.input_enabled());
    assert_eq!(state.phase(), MatchPhase::RoundEnding);

    // Only the first death of a round counts
    assert!(state.record_death(PlayerIndex::TWO, 3).is_none());
    assert_eq!(state.score(PlayerIndex::ONE), 0);
}

#[test]
fn test_match_won_at_threshold() {
    let mut state = MatchState::default();
    state.start_match();
    for round in 1..=2 {
        state.begin_round();
        state.enable_input();
        let outcome = state.record_death(PlayerIndex::TWO, 2).expect("round active");
        assert_eq!(outcome.match_won, round == 2);
    }
    assert_eq!(state.score(PlayerIndex::ONE), 2);

    state.start_match();
    assert_eq!(state.score(PlayerIndex::ONE), 0);
    assert_eq!(state.round(), 0);
}

#[test]
fn test_last_word_once_per_round() {
    let mut state = MatchState::default();
    state.start_match();
    state.begin_round();
    assert!(!state.claim_last_word(PlayerIndex::ONE));

    state.enable_input();
    assert!(state.claim_last_word(PlayerIndex::ONE));
    assert!(!state.claim_last_word(PlayerIndex::TWO));
    assert_eq!(state.last_word(), Some(PlayerIndex::ONE));

    state.begin_round();
    assert_eq!(state.last_word(), None);
}

#[test]
fn test_first_round_starts_locked_with_splash() {
    let app = test_app();

    let [first, second] = actors(&app);
    let world = app.world();
    assert_eq!(world.get::<Targeting>(first).unwrap().target, Some(second));
    assert_eq!(world.get::<Targeting>(second).unwrap().target, Some(first));

    assert_eq!(match_state(&app).phase(), MatchPhase::RoundStarting);
    assert!(!match_state(&app).input_enabled());
    assert_eq!(splash_text(&app).as_deref(), Some("Get em'!"));
}

#[test]
fn test_round_start_splash_enables_input() {
    let mut app = test_app();
    finish_splash(&mut app);

    assert!(match_state(&app).input_enabled());
    assert_eq!(match_state(&app).phase(), MatchPhase::RoundActive);
    assert!(splash_text(&app).is_none());
}

#[test]
fn test_death_scores_and_resets_arena() {
    let mut app = test_app();
    finish_splash(&mut app);
    let before = actors(&app);

    kill(&mut app, PlayerIndex::ONE);

    assert_eq!(match_state(&app).score(PlayerIndex::TWO), 1);
    assert_eq!(match_state(&app).score(PlayerIndex::ONE), 0);
    assert!(!match_state(&app).input_enabled());
    assert_eq!(splash_text(&app).as_deref(), Some("(P2) Rhea wins!"));

    finish_splash(&mut app);

    let after = actors(&app);
    assert_ne!(before, after);
    for entity in before {
        assert!(app.world().get_entity(entity).is_err());
    }
    assert_eq!(match_state(&app).round(), 2);
    assert_eq!(match_state(&app).phase(), MatchPhase::RoundStarting);
    assert!(app.world().resource::<MatchEndings>().0.is_empty());

    // Fresh round, fresh health
    let stats = app.world().resource::<PlayerStats>();
    assert!(!stats.is_dead(PlayerIndex::ONE));
    assert_eq!(stats.health(PlayerIndex::ONE).percent(), 1.0);
}

#[test]
fn test_arena_always_holds_two_cross_wired_actors() {
    let mut app = test_app();

    for _ in 0..2 {
        finish_splash(&mut app);
        kill(&mut app, PlayerIndex::TWO);
        finish_splash(&mut app);

        let [first, second] = actors(&app);
        let world = app.world_mut();
        assert_eq!(world.get::<Targeting>(first).unwrap().target, Some(second));
        assert_eq!(world.get::<Targeting>(second).unwrap().target, Some(first));

        let mut controllers = world.query::<&crate::character::CharacterController>();
        let mut players: Vec<_> = controllers
            .iter(world)
            .map(|controller| controller.player.index())
            .collect();
        players.sort_unstable();
        assert_eq!(players, vec![0, 1]);
    }
}

#[test]
fn test_final_round_ends_match_without_reset() {
    let mut app = test_app();

    for _ in 0..2 {
        finish_splash(&mut app);
        kill(&mut app, PlayerIndex::TWO);
        finish_splash(&mut app);
    }

    finish_splash(&mut app);
    let before = actors(&app);
    kill(&mut app, PlayerIndex::TWO);
    assert_eq!(match_state(&app).score(PlayerIndex::ONE), 3);
    assert_eq!(splash_text(&app).as_deref(), Some("(P1) Rhea wins!"));

    finish_splash(&mut app);

    assert_eq!(
        app.world().resource::<MatchEndings>().0,
        vec![PlayerIndex::ONE]
    );
    assert_eq!(match_state(&app).phase(), MatchPhase::MatchEnded);
    assert_eq!(actors(&app), before);
    assert!(splash_text(&app).is_none());
}

/// Play rounds until P1 has taken the match.
fn play_out_match(app: &mut App) {
    let wins_needed = app.world().resource::<MatchConfig>().wins_needed;
    for _ in 0..wins_needed {
        finish_splash(app);
        kill(app, PlayerIndex::TWO);
        finish_splash(app);
    }
    assert_eq!(match_state(app).phase(), MatchPhase::MatchEnded);
}

#[test]
fn test_new_match_after_victory_starts_clean() {
    let mut app = test_app();
    play_out_match(&mut app);
    let old_actors = actors(&app);

    write(&mut app, NewMatchEvent);
    app.update();

    assert_eq!(match_state(&app).score(PlayerIndex::ONE), 0);
    assert_eq!(match_state(&app).round(), 1);
    assert_eq!(match_state(&app).phase(), MatchPhase::RoundStarting);
    assert_ne!(actors(&app), old_actors);
    assert_eq!(splash_text(&app).as_deref(), Some("Get em'!"));
    assert_eq!(app.world().resource::<SplashText>().queued(), 0);

    finish_splash(&mut app);

    assert_eq!(match_state(&app).round(), 1);
    assert_eq!(match_state(&app).phase(), MatchPhase::RoundActive);
    assert!(splash_text(&app).is_none());
}

#[test]
fn test_new_match_ignored_while_round_is_ending() {
    let mut app = test_app();
    finish_splash(&mut app);
    kill(&mut app, PlayerIndex::ONE);

    write(&mut app, NewMatchEvent);
    app.update();

    assert_eq!(match_state(&app).score(PlayerIndex::TWO), 1);
    assert_eq!(match_state(&app).phase(), MatchPhase::RoundEnding);
    assert_eq!(splash_text(&app).as_deref(), Some("(P2) Rhea wins!"));

    // The pending round reset still runs exactly once
    finish_splash(&mut app);
    assert_eq!(match_state(&app).round(), 2);
    assert_eq!(splash_text(&app).as_deref(), Some("Get em'!"));
    assert_eq!(app.world().resource::<SplashText>().queued(), 0);

    finish_splash(&mut app);
    assert_eq!(match_state(&app).round(), 2);
    assert!(splash_text(&app).is_none());
}

#[test]
fn test_resources_read_match_config() {
    let mut world = World::new();
    world.insert_resource(MatchConfig {
        max_health: 40.0,
        splash_seconds: 0.25,
        spell_cooldowns: SpellCooldowns {
            movement: 7.0,
            ..SpellCooldowns::default()
        },
        ..MatchConfig::default()
    });

    world.init_resource::<PlayerStats>();
    world.init_resource::<SplashText>();
    world.init_resource::<SpellMap>();

    assert_eq!(world.resource::<PlayerStats>().health(PlayerIndex::ONE).max, 40.0);
    assert_eq!(
        world.resource::<SpellMap>().cooldown_duration(SpellKind::Movement),
        7.0
    );

    let mut splash = world.resource_mut::<SplashText>();
    splash.splash("short", SplashContinuation::None);
    assert!(splash.tick(Duration::from_secs_f32(0.2)).is_empty());
    assert_eq!(splash.tick(Duration::from_secs_f32(0.1)).len(), 1);
}

#[test]
fn test_last_word_splash_is_accepted_once() {
    let mut app = test_app();
    finish_splash(&mut app);

    write(
        &mut app,
        LastWordEvent {
            player: PlayerIndex::TWO,
        },
    );
    write(
        &mut app,
        LastWordEvent {
            player: PlayerIndex::ONE,
        },
    );
    app.update();

    assert_eq!(splash_text(&app).as_deref(), Some("(P2) Last Word!"));
    assert_eq!(app.world().resource::<SplashText>().queued(), 0);

    // Last Word never touches the input gate
    finish_splash(&mut app);
    assert!(match_state(&app).input_enabled());
}
