//! Startup error types for the browser front end.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Anything that stops the game from being mounted.
#[derive(Debug, Display, Error, From)]
pub enum StartError {
    /// The bundled configuration could not be read.
    #[display("{}", _0)]
    #[from]
    Config(ConfigError),

    /// The log subscriber could not be installed.
    #[display("Failed to install logger: {}", _0)]
    Logging(#[error(not(source))] String),

    /// The page has no element to mount into.
    #[display("No element with id '{}' to mount into", _0)]
    MissingMountPoint(#[error(not(source))] String),
}
