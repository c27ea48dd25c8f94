//! PyBrix Trainer
//!
//! A terminal presentation-and-quiz trainer that walks students through a
//! slide deck about Python and PyBricks, then quizzes them with scoring and
//! a review of every answer.

use std::fmt;

pub mod app;
pub mod config;
pub mod content;
pub mod plain;
pub mod render;
pub mod session;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum TrainerError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Slide deck or question bank is missing, unreadable or malformed
    ContentError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerError::IoError(err) => write!(f, "I/O error: {}", err),
            TrainerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TrainerError::ContentError(msg) => write!(f, "Content error: {}", msg),
            TrainerError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for TrainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrainerError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrainerError {
    fn from(err: std::io::Error) -> Self {
        TrainerError::IoError(err)
    }
}

impl From<serde_json::Error> for TrainerError {
    fn from(err: serde_json::Error) -> Self {
        TrainerError::ContentError(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for TrainerError {
    fn from(err: toml::de::Error) -> Self {
        TrainerError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for TrainerError {
    fn from(err: toml::ser::Error) -> Self {
        TrainerError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;

/// Error handling utilities
pub mod error {
    use super::TrainerError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &TrainerError) -> String {
        match error {
            TrainerError::ContentError(msg) => {
                format!("The training content could not be used: {}. Check the content file or remove `content_path` from your config.", msg)
            }
            TrainerError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            TrainerError::TuiError(_) => {
                "The terminal could not be set up. Try again with --plain.".to_string()
            }
            TrainerError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "pybrix-trainer";
pub const CONFIG_FILE: &str = "pybrix-trainer.toml";
pub const ANSWER_COUNT: usize = 4;
