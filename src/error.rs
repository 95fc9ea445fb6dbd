//! Error types for mindcaps

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mindcaps application
#[derive(Debug, Error)]
pub enum MindcapsError {
    #[error("Not a mindcaps directory: {0}")]
    NotMindcapsDirectory(PathBuf),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MindcapsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MindcapsError::NotMindcapsDirectory(_) => 2,
            MindcapsError::InvalidFormat(_) => 3,
            MindcapsError::NotFound(_) => 4,
            MindcapsError::InvalidInput(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MindcapsError::NotMindcapsDirectory(path) => {
                format!(
                    "Not a mindcaps directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'mindcaps init' in this directory to create a new journal\n\
                    • Navigate to an existing mindcaps directory\n\
                    • Set MINDCAPS_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MindcapsError::InvalidFormat(msg) => {
                format!(
                    "Invalid format: {}\n\n\
                    Nothing was imported; your journal is unchanged.\n\
                    Expected a JSON array of entries, as written by 'mindcaps export'.",
                    msg
                )
            }
            MindcapsError::InvalidInput(msg) => {
                if msg.contains("mood") {
                    format!(
                        "Invalid input: {}\n\n\
                        Valid moods: happy, sad, stressed, calm, excited\n\
                        Example: mindcaps log calm --intensity 6 --note \"quiet walk\"",
                        msg
                    )
                } else if msg.contains("date") {
                    format!(
                        "Invalid input: {}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: mindcaps streak --today 2024-01-10",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            MindcapsError::Config(msg) => {
                if msg.contains("Invalid timezone") {
                    format!(
                        "{}\n\n\
                        Valid timezones: local, utc\n\
                        Example: mindcaps config timezone utc",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MindcapsError
pub type Result<T> = std::result::Result<T, MindcapsError>;
