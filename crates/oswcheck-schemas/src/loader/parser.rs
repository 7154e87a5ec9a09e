//! JSON, GeoJSON and YAML parsing
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json, .geojson)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            match extension.to_lowercase().as_str() {
                "yaml" | "yml" => Ok(Format::Yaml),
                "json" | "geojson" => Ok(Format::Json),
                _ => Err(LoaderError::unsupported_format(path.to_path_buf())),
            }
        } else {
            Err(LoaderError::unsupported_format(path.to_path_buf()))
        }
    }
}

/// Parser for schema and document files
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a file, detecting format from its extension
    ///
    /// Files with an unknown extension are tried as JSON, then YAML.
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Value> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

        match Format::from_path(path) {
            Ok(format) => self.parse_content(&content, format, path),
            Err(_) => self.parse_with_fallback(&content, path).map(|(value, _)| value),
        }
    }

    /// Parse content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

        // Convert to JSON Value for consistent handling
        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Try JSON first (stricter), then YAML
    pub fn parse_with_fallback(&self, content: &str, path: &Path) -> LoaderResult<(Value, Format)> {
        if let Ok(value) = self.parse_json(content, path) {
            return Ok((value, Format::Json));
        }

        if let Ok(value) = self.parse_yaml(content, path) {
            return Ok((value, Format::Yaml));
        }

        Err(LoaderError::unsupported_format(path.to_path_buf()))
    }

    /// Check that a value can serve as a Draft 7 schema root
    pub fn validate_schema_root(&self, value: &Value, path: &Path) -> LoaderResult<()> {
        if value.is_object() || value.is_boolean() {
            Ok(())
        } else {
            Err(LoaderError::NotASchema {
                path: path.to_path_buf(),
            })
        }
    }
}
