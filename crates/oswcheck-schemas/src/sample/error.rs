//! Error types for sample generation
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for sample generation
pub type SampleResult<T> = Result<T, SampleError>;

/// Reasons a schema cannot be sampled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// No feature tags were requested
    #[error("at least one tag is required, e.g. Sidewalk or Bench")]
    NoTags,

    /// The schema carries no `definitions` object to look tags up in
    #[error("schema has no definitions to sample from")]
    MissingDefinitions,

    /// A requested tag has no definition
    #[error("tag \"{tag}\" not found in schema definitions")]
    UnknownTag { tag: String },

    /// A `$ref` inside a tag definition points nowhere
    #[error("cannot resolve $ref \"{reference}\"")]
    BrokenReference { reference: String },
}

impl SampleError {
    /// Create an unknown tag error
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag { tag: tag.into() }
    }
}
