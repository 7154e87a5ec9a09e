//! Raw validator errors and the reduced per-feature report
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::path::{to_pointer, PathSegment};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON Schema keyword that produced an error
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    Enum,
    Type,
    Required,
    Const,
    Pattern,
    Minimum,
    Maximum,
    AnyOf,
    /// Any other keyword, kept by name (`oneOf`, `dependencies`, `format`, ...)
    Other(String),
}

impl Keyword {
    /// Map a keyword name to its variant
    pub fn from_name(name: &str) -> Self {
        match name {
            "enum" => Self::Enum,
            "type" => Self::Type,
            "required" => Self::Required,
            "const" => Self::Const,
            "pattern" => Self::Pattern,
            "minimum" => Self::Minimum,
            "maximum" => Self::Maximum,
            "anyOf" => Self::AnyOf,
            other => Self::Other(other.to_string()),
        }
    }

    /// Keyword name as it appears in a schema
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enum => "enum",
            Self::Type => "type",
            Self::Required => "required",
            Self::Const => "const",
            Self::Pattern => "pattern",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::AnyOf => "anyOf",
            Self::Other(name) => name,
        }
    }

    /// Specificity tier, lower is more actionable
    ///
    /// Leaf keywords name the root cause directly. Combinators such as `anyOf`
    /// report a cascade of branch failures and rank last.
    pub fn priority_tier(&self) -> u8 {
        match self {
            Self::Enum => 0,
            Self::Type | Self::Required | Self::Const => 1,
            Self::Pattern | Self::Minimum | Self::Maximum => 2,
            Self::AnyOf | Self::Other(_) => 3,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One error as produced by the validator, before any reduction
#[derive(Debug, Clone, PartialEq)]
pub struct RawError {
    /// Location of the offending value in the document
    pub instance_path: Vec<PathSegment>,
    /// Location of the failing constraint in the schema
    pub schema_path: Vec<PathSegment>,
    /// Keyword that failed
    pub keyword: Keyword,
    /// The value that failed
    pub instance_value: Value,
    /// The keyword's configured value, e.g. the allowed enum list
    pub keyword_value: Option<Value>,
    /// Validator-provided message, possibly spanning several lines
    pub message: String,
}

impl RawError {
    /// Create a raw error with empty paths
    pub fn new<M: Into<String>>(keyword: Keyword, message: M) -> Self {
        Self {
            instance_path: Vec::new(),
            schema_path: Vec::new(),
            keyword,
            instance_value: Value::Null,
            keyword_value: None,
            message: message.into(),
        }
    }

    /// Set the instance path
    pub fn at(mut self, instance_path: Vec<PathSegment>) -> Self {
        self.instance_path = instance_path;
        self
    }

    /// Set the schema path
    pub fn with_schema_path(mut self, schema_path: Vec<PathSegment>) -> Self {
        self.schema_path = schema_path;
        self
    }

    /// Set the offending instance value
    pub fn with_instance(mut self, value: Value) -> Self {
        self.instance_value = value;
        self
    }

    /// Set the keyword's configured value
    pub fn with_keyword_value(mut self, value: Value) -> Self {
        self.keyword_value = Some(value);
        self
    }

    /// Instance path as a JSON pointer, for logs
    pub fn instance_pointer(&self) -> String {
        to_pointer(&self.instance_path)
    }
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at '{}': {}",
            self.keyword,
            self.instance_pointer(),
            self.message
        )
    }
}

/// The feature an error belongs to
///
/// `Document` sorts before every feature, matching its `-1` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureIndex {
    /// The error is not inside any `features[i]`
    Document,
    /// Zero-based position in the `features` array
    Feature(usize),
}

impl FeatureIndex {
    /// Numeric form used in reports, `-1` for document-level errors
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Document => -1,
            Self::Feature(index) => *index as i64,
        }
    }
}

impl fmt::Display for FeatureIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// One line of the final report
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// Feature position, or `-1` for document-level errors
    pub feature_index: i64,
    /// Rendered single-line message
    pub error: String,
}

impl ReportEntry {
    /// Create a report entry
    pub fn new<E: Into<String>>(feature_index: FeatureIndex, error: E) -> Self {
        Self {
            feature_index: feature_index.as_i64(),
            error: error.into(),
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature {}: {}", self.feature_index, self.error)
    }
}

/// Result of validating one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Deduplicated entries, sorted by `(featureIndex, error)`
    pub entries: Vec<ReportEntry>,
    /// Number of raw validator errors the entries were reduced from
    pub raw_error_count: usize,
}

impl ValidationReport {
    /// True when the document has no schema violations
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of report entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that belong to a feature (excludes document-level)
    pub fn feature_count(&self) -> usize {
        self.entries.iter().filter(|e| e.feature_index >= 0).count()
    }
}
