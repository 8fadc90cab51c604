//! Character domain: the behaviour state machine and its state contract.
//!
//! Each character owns exactly one active [`CharacterState`]. States never
//! replace themselves directly: they ask for a transition through
//! [`StateInput::change_state`], and the machine applies every request in
//! the order it was made as soon as the state's callback returns.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::character::{AnimationCue, CharacterController};
use crate::controls::SpellMap;
use crate::core::{LastWordEvent, PlayerIndex};
use crate::stats::PlayerStats;

/// Context handed from the old state to the new state's `enter`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionInfo {
    /// Velocity of the character at the moment of the transition
    pub velocity: Vec2,
}

/// One behaviour of a character (idle, dash, shield, ...).
pub trait CharacterState: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn enter(&mut self, input: &mut StateInput<'_>, info: Option<TransitionInfo>);

    /// Called on the outgoing state right before it is dropped.
    fn exit(&mut self, _input: &mut StateInput<'_>) {}

    fn update(&mut self, input: &mut StateInput<'_>);

    fn fixed_update(&mut self, input: &mut StateInput<'_>);
}

fn construct<S: CharacterState + Default>() -> Box<dyn CharacterState> {
    Box::new(S::default())
}

struct TransitionRequest {
    construct: fn() -> Box<dyn CharacterState>,
    info: Option<TransitionInfo>,
}

/// Everything a state may read or change during one callback.
pub struct StateInput<'a> {
    pub player: PlayerIndex,
    /// Movement axis for this player, zero while input is disabled
    pub movement: Vec2,
    pub position: Vec2,
    /// Position of the opponent this character is targeting
    pub target: Option<Vec2>,
    pub dt: f32,
    pub controller: &'a mut CharacterController,
    pub velocity: &'a mut LinearVelocity,
    pub anim: &'a mut AnimationCue,
    pub spells: &'a mut SpellMap,
    pub stats: &'a mut PlayerStats,
    pub last_words: &'a mut Vec<LastWordEvent>,
    transitions: Vec<TransitionRequest>,
}

impl<'a> StateInput<'a> {
    pub fn new(
        controller: &'a mut CharacterController,
        velocity: &'a mut LinearVelocity,
        anim: &'a mut AnimationCue,
        spells: &'a mut SpellMap,
        stats: &'a mut PlayerStats,
        last_words: &'a mut Vec<LastWordEvent>,
    ) -> Self {
        Self {
            player: controller.player,
            movement: Vec2::ZERO,
            position: Vec2::ZERO,
            target: None,
            dt: 0.0,
            controller,
            velocity,
            anim,
            spells,
            stats,
            last_words,
            transitions: Vec::new(),
        }
    }

    /// Ask the owning machine to switch to `S` once the current callback returns.
    pub fn change_state<S: CharacterState + Default>(&mut self, info: Option<TransitionInfo>) {
        self.transitions.push(TransitionRequest {
            construct: construct::<S>,
            info,
        });
    }
}

#[derive(Component)]
pub struct CharacterStateMachine {
    state: Box<dyn CharacterState>,
    enter_count: u32,
}

impl std::fmt::Debug for CharacterStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterStateMachine")
            .field("state", &self.state.name())
            .field("enter_count", &self.enter_count)
            .finish()
    }
}

impl CharacterStateMachine {
    /// Build a machine already running `S`.
    pub fn new<S: CharacterState + Default>(input: &mut StateInput<'_>) -> Self {
        let mut machine = Self {
            state: construct::<S>(),
            enter_count: 0,
        };
        machine.enter_current(input, None);
        machine.apply_transitions(input);
        machine
    }

    pub fn current_name(&self) -> &'static str {
        self.state.name()
    }

    /// Total number of `enter` calls made by this machine
    pub fn enter_count(&self) -> u32 {
        self.enter_count
    }

    /// Replace the active state with a fresh `S` and enter it.
    ///
    /// Switching to the type that is already active is a full re-entry.
    pub fn change_state<S: CharacterState + Default>(
        &mut self,
        input: &mut StateInput<'_>,
        info: Option<TransitionInfo>,
    ) {
        self.swap(construct::<S>, input, info);
        self.apply_transitions(input);
    }

    pub fn update(&mut self, input: &mut StateInput<'_>) {
        self.state.update(input);
        self.apply_transitions(input);
    }

    pub fn fixed_update(&mut self, input: &mut StateInput<'_>) {
        self.state.fixed_update(input);
        self.apply_transitions(input);
    }

    fn enter_current(&mut self, input: &mut StateInput<'_>, info: Option<TransitionInfo>) {
        self.enter_count += 1;
        self.state.enter(input, info);
    }

    fn swap(
        &mut self,
        construct: fn() -> Box<dyn CharacterState>,
        input: &mut StateInput<'_>,
        info: Option<TransitionInfo>,
    ) {
        self.state.exit(input);
        let previous = std::mem::replace(&mut self.state, construct());
        let from = previous.name();
        drop(previous);

        debug!("{} state {} -> {}", input.player, from, self.state.name());
        self.enter_current(input, info);
    }

    fn apply_transitions(&mut self, input: &mut StateInput<'_>) {
        while !input.transitions.is_empty() {
            let requests = std::mem::take(&mut input.transitions);
            for request in requests {
                self.swap(request.construct, input, request.info);
            }
        }
    }
}
