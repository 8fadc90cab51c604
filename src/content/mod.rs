//! Content domain: match configuration loading and validation.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{CharacterTuning, CharacterType, MatchConfig, SpellCooldowns};
pub use loader::{ConfigLoadError, load_match_config};
pub use validation::validate_match_config;

use bevy::prelude::*;
use std::path::Path;

pub const MATCH_CONFIG_PATH: &str = "assets/data/match.ron";

/// Loads `MatchConfig` while the app is being built.
///
/// A missing file falls back to defaults. A malformed or invalid file aborts
/// startup: the arena is never set up from a half-valid config.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_match_config(Path::new(MATCH_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded match config from {}", MATCH_CONFIG_PATH);
                config
            }
            Err(ConfigLoadError::Missing { file }) => {
                warn!("{} not found, using default match config", file);
                MatchConfig::default()
            }
            Err(e) => {
                error!("{}", e);
                panic!("failed to load match configuration: {}", e);
            }
        };

        let errors = validate_match_config(&config);
        if !errors.is_empty() {
            for e in &errors {
                error!("Invalid match config: {}", e);
            }
            panic!("match configuration has {} error(s)", errors.len());
        }

        app.register_type::<MatchConfig>()
            .register_type::<CharacterType>()
            .insert_resource(config);
    }
}
