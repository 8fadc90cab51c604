//! Splash domain: timed on-screen messages that continue the match flow.
//!
//! A splash is shown for a fixed time and then finishes exactly once, writing
//! a `SplashFinishedEvent` that carries what should happen next. Splashes
//! requested while another is on screen wait in a queue.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;
use std::collections::VecDeque;
use std::time::Duration;

use crate::content::MatchConfig;
use crate::core::PlayerIndex;

/// What the match coordinator does once a splash has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashContinuation {
    None,
    EnableInput,
    ResetArena,
    MatchEnded { winner: PlayerIndex },
}

#[derive(Debug, Clone)]
pub struct SplashFinishedEvent {
    pub text: String,
    pub continuation: SplashContinuation,
}

impl Message for SplashFinishedEvent {}

#[derive(Debug)]
struct ActiveSplash {
    text: String,
    continuation: SplashContinuation,
    timer: Timer,
}

#[derive(Resource, Debug)]
pub struct SplashText {
    duration: Duration,
    active: Option<ActiveSplash>,
    queue: VecDeque<(String, SplashContinuation)>,
}

impl FromWorld for SplashText {
    fn from_world(world: &mut World) -> Self {
        let seconds = world
            .get_resource::<MatchConfig>()
            .map(|config| config.splash_seconds)
            .unwrap_or(MatchConfig::default().splash_seconds);
        Self::new(seconds)
    }
}

impl SplashText {
    pub fn new(seconds: f32) -> Self {
        Self {
            duration: Duration::from_secs_f32(seconds),
            active: None,
            queue: VecDeque::new(),
        }
    }

    fn start(&self, text: String, continuation: SplashContinuation) -> ActiveSplash {
        debug!("Splash '{}' started", text);
        ActiveSplash {
            text,
            continuation,
            timer: Timer::new(self.duration, TimerMode::Once),
        }
    }

    /// Show `text`, then run `continuation` once it has finished.
    pub fn splash(&mut self, text: impl Into<String>, continuation: SplashContinuation) {
        let text = text.into();
        if self.active.is_none() {
            self.active = Some(self.start(text, continuation));
        } else {
            self.queue.push_back((text, continuation));
        }
    }

    /// Drop the splash on screen and everything queued, without finishing them.
    pub fn clear(&mut self) {
        self.active = None;
        self.queue.clear();
    }

    pub fn current_text(&self) -> Option<&str> {
        self.active.as_ref().map(|splash| splash.text.as_str())
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Splashes waiting behind the one on screen
    #[cfg(test)]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Finish the splash on screen right away and start the next queued one.
    pub fn complete_current(&mut self) -> Option<SplashFinishedEvent> {
        let finished = self.active.take()?;
        if let Some((text, continuation)) = self.queue.pop_front() {
            self.active = Some(self.start(text, continuation));
        }

        Some(SplashFinishedEvent {
            text: finished.text,
            continuation: finished.continuation,
        })
    }

    /// Advance the splash on screen. Each splash finishes at most once.
    pub fn tick(&mut self, delta: Duration) -> Vec<SplashFinishedEvent> {
        let mut finished = Vec::new();
        let mut delta = delta;

        while let Some(active) = self.active.as_mut() {
            active.timer.tick(delta);
            if active.timer.remaining_secs() > 0.0 {
                break;
            }
            finished.extend(self.complete_current());
            // The next splash starts fresh on the following frame
            delta = Duration::ZERO;
        }

        finished
    }
}

pub(crate) fn tick_splash(
    time: Res<Time>,
    mut splash: ResMut<SplashText>,
    mut finished_events: MessageWriter<SplashFinishedEvent>,
) {
    if splash.is_idle() {
        return;
    }

    for event in splash.tick(time.delta()) {
        debug!("Splash '{}' finished", event.text);
        finished_events.write(event);
    }
}

pub struct SplashPlugin;

impl Plugin for SplashPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SplashText>()
            .add_message::<SplashFinishedEvent>()
            .add_systems(Update, tick_splash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_finishes_once_after_duration() {
        let mut splash = SplashText::new(1.0);
        splash.splash("Get em'!", SplashContinuation::EnableInput);
        assert_eq!(splash.current_text(), Some("Get em'!"));

        assert!(splash.tick(Duration::from_secs_f32(0.5)).is_empty());

        let finished = splash.tick(Duration::from_secs_f32(0.6));
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].continuation, SplashContinuation::EnableInput);
        assert!(splash.is_idle());

        assert!(splash.tick(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_queued_splash_waits_its_turn() {
        let mut splash = SplashText::new(1.0);
        splash.splash("first", SplashContinuation::None);
        splash.splash("second", SplashContinuation::ResetArena);
        assert_eq!(splash.queued(), 1);

        let finished = splash.tick(Duration::from_secs(2));
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].text, "first");
        assert_eq!(splash.current_text(), Some("second"));

        let finished = splash.tick(Duration::from_secs(2));
        assert_eq!(finished[0].continuation, SplashContinuation::ResetArena);
        assert!(splash.is_idle());
    }

    #[test]
    fn test_clear_drops_queued_continuations() {
        let mut splash = SplashText::new(1.0);
        splash.splash("first", SplashContinuation::ResetArena);
        splash.splash("second", SplashContinuation::EnableInput);

        splash.clear();

        assert!(splash.is_idle());
        assert_eq!(splash.queued(), 0);
        assert!(splash.tick(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_complete_current_on_idle_is_none() {
        let mut splash = SplashText::new(1.0);
        assert!(splash.complete_current().is_none());
    }
}
