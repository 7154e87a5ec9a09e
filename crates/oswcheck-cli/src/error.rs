//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use oswcheck_schemas::{LoaderError, SampleError};
use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Schema or document could not be loaded
    #[error("{0}")]
    Load(#[from] LoaderError),

    /// The schema cannot be sampled for the requested tags
    #[error("Cannot generate samples: {0}")]
    Sample(#[from] SampleError),

    /// No schema given on the command line, environment or configuration
    #[error("No schema specified. Pass --schema, set OSWCHECK_SCHEMA or add schema.path to the configuration")]
    MissingSchema,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document violates the schema and --fail-on-errors was given
    #[error("{} feature(s) failed validation", count)]
    ValidationFailed { count: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::ValidationFailed { .. } => 1,
            Self::Load(_) => 3,
            Self::MissingSchema => 3,
            Self::Sample(_) => 4,
            Self::Config(_) => 5,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::MissingSchema)
    }

    /// Whether the message was already conveyed by the printed report
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self::config(format!("cannot serialize configuration: {}", e))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::config(e.to_string())
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
