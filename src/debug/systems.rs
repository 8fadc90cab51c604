//! Debug domain: debug systems for hotkeys and the info overlay.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::character::{CharacterController, CharacterStateMachine};
use crate::controls::{SpellKind, SpellMap};
use crate::core::{MatchState, PlayerIndex};
use crate::debug::state::{DEBUG_DAMAGE, DebugState};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::splash::{SplashFinishedEvent, SplashText};
use crate::stats::{DamageEvent, PlayerStats};

/// F1/F2 damage P1/P2, F3 skips the splash, F4 toggles the info overlay
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut splash: ResMut<SplashText>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut splash_events: MessageWriter<SplashFinishedEvent>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    for (key, target) in [(KeyCode::F1, PlayerIndex::ONE), (KeyCode::F2, PlayerIndex::TWO)] {
        if keyboard.just_pressed(key) {
            damage_events.write(DamageEvent {
                target,
                amount: DEBUG_DAMAGE,
            });
            debug_state.set_message(format!("{} took {} damage", target, DEBUG_DAMAGE), 2.0);
            info!("[DEBUG] Dealt {} damage to {}", DEBUG_DAMAGE, target);
        }
    }

    if keyboard.just_pressed(KeyCode::F3) {
        if let Some(finished) = splash.complete_current() {
            debug_state.set_message(format!("Skipped '{}'", finished.text), 2.0);
            info!("[DEBUG] Skipped splash '{}'", finished.text);
            splash_events.write(finished);
        }
    }

    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "[DEBUG] Debug info {}",
            if debug_state.show_info { "ON" } else { "OFF" }
        );

        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Update the debug info overlay with both actors' state
pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    match_state: Res<MatchState>,
    stats: Res<PlayerStats>,
    spells: Res<SpellMap>,
    actors: Query<(&CharacterController, &CharacterStateMachine, &Transform)>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut lines = vec![format!(
        "Round {} {:?} input:{}",
        match_state.round(),
        match_state.phase(),
        match_state.input_enabled()
    )];

    let mut actors: Vec<_> = actors.iter().collect();
    actors.sort_by_key(|(controller, _, _)| controller.player.index());
    for (controller, machine, transform) in actors {
        let player = controller.player;
        let health = stats.health(player);
        let cooldowns = SpellKind::ALL
            .map(|kind| format!("{:.1}", spells.cooldown_remaining(player, kind)))
            .join("/");
        lines.push(format!(
            "{} {} ({:.0}, {:.0}) HP {:.0}/{:.0}{} CD {}",
            player,
            machine.current_name(),
            transform.translation.x,
            transform.translation.y,
            health.current,
            health.max,
            if stats.is_shielded(player) { " [S]" } else { "" },
            cooldowns
        ));
    }

    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }

    **text = lines.join("\n");
}
