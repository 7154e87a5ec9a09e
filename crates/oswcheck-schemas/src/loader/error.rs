//! Error types for schema and document loading
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Failures that stop a validation run before the pipeline starts
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Content parses as neither JSON nor YAML
    #[error("Unsupported file format for '{path}'. Expected JSON, GeoJSON or YAML")]
    UnsupportedFormat { path: PathBuf },

    /// The schema root is not a schema
    #[error("Schema '{path}' must be a JSON object or boolean at the root level")]
    NotASchema { path: PathBuf },

    /// The schema does not compile as Draft 7
    #[error("schema does not compile as Draft 7: {reason}")]
    Compile { reason: String },

    /// Any failure while loading the schema
    #[error("invalid or missing schema file: {source}")]
    Schema { source: Box<LoaderError> },

    /// Any failure while loading the document under validation
    #[error("invalid or missing document file: {source}")]
    Document { source: Box<LoaderError> },
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path,
            source: error,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create a schema compilation error, already wrapped as a schema failure
    pub fn schema_compile(reason: String) -> Self {
        Self::Compile { reason }.in_schema()
    }

    /// Wrap as a schema load failure
    pub fn in_schema(self) -> Self {
        match self {
            Self::Schema { .. } => self,
            other => Self::Schema {
                source: Box::new(other),
            },
        }
    }

    /// Wrap as a document load failure
    pub fn in_document(self) -> Self {
        match self {
            Self::Document { .. } => self,
            other => Self::Document {
                source: Box::new(other),
            },
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::IoError { path, .. } => Some(path),
            Self::YamlParseError { path, .. } => Some(path),
            Self::JsonParseError { path, .. } => Some(path),
            Self::UnsupportedFormat { path } => Some(path),
            Self::NotASchema { path } => Some(path),
            Self::Schema { source } | Self::Document { source } => source.path(),
            Self::Compile { .. } => None,
        }
    }

    /// True for failures loading the schema side
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}
