//! Loader for the RON match configuration at startup.

use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::data::MatchConfig;

/// Error type for configuration loading failures.
#[derive(Debug)]
pub enum ConfigLoadError {
    /// The file does not exist; callers fall back to defaults
    Missing { file: String },
    Io { file: String, message: String },
    Parse { file: String, message: String },
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Missing { file } => write!(f, "{} does not exist", file),
            ConfigLoadError::Io { file, message } => {
                write!(f, "Failed to load {}: IO error: {}", file, message)
            }
            ConfigLoadError::Parse { file, message } => {
                write!(f, "Failed to load {}: Parse error: {}", file, message)
            }
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a match configuration from RON source text.
pub fn parse_match_config(contents: &str, file: &str) -> Result<MatchConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
}

/// Load the match configuration from disk.
pub fn load_match_config(path: &Path) -> Result<MatchConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigLoadError::Missing {
            file: file_name.clone(),
        },
        _ => ConfigLoadError::Io {
            file: file_name.clone(),
            message: e.to_string(),
        },
    })?;

    parse_match_config(&contents, &file_name)
}
