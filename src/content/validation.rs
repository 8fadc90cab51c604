//! Validation for match configuration values.

use super::data::MatchConfig;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ConfigValidationError {
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate every field of the match configuration.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_match_config(config: &MatchConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        config.wins_needed >= 1,
        "wins_needed",
        "must be at least 1, got {}",
        config.wins_needed
    );
    check!(
        errors,
        config.splash_seconds > 0.0,
        "splash_seconds",
        "must be positive, got {}",
        config.splash_seconds
    );
    check!(
        errors,
        config.max_health > 0.0,
        "max_health",
        "must be positive, got {}",
        config.max_health
    );

    let cooldowns = &config.spell_cooldowns;
    for (field, value) in [
        ("spell_cooldowns.intrinsic", cooldowns.intrinsic),
        ("spell_cooldowns.primary", cooldowns.primary),
        ("spell_cooldowns.movement", cooldowns.movement),
    ] {
        check!(errors, value >= 0.0, field, "must not be negative, got {}", value);
    }

    // Actors must not overlap on spawn
    check!(
        errors,
        config.spawn_points[0] != config.spawn_points[1],
        "spawn_points",
        "players must spawn at distinct points, both are {:?}",
        config.spawn_points[0]
    );

    errors
}
