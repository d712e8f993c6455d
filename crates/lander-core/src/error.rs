//! Error types for the lander game

use thiserror::Error;

/// The main error type for lander operations
#[derive(Debug, Error)]
pub enum LanderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

/// Result type alias for lander operations
pub type Result<T> = std::result::Result<T, LanderError>;

impl From<toml::de::Error> for LanderError {
    fn from(err: toml::de::Error) -> Self {
        LanderError::TomlParseError(err.to_string())
    }
}
