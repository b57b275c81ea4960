//! Domain error types

use thiserror::Error;

/// Error when a notification kind token is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notification type: {input}")]
pub struct UnknownNotificationTypeError {
    pub input: String,
}

/// Error when the preferences file cannot be handled
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read preferences file: {0}")]
    ReadError(String),

    #[error("Failed to parse preferences file: {0}")]
    ParseError(String),

    #[error("Failed to write preferences file: {0}")]
    WriteError(String),

    #[error("Invalid value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Preferences file already exists at: {0}")]
    AlreadyExists(String),
}
