//! Loading of the schema and of the document under validation
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::SchemaParser,
};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, instrument};

/// Reads schema and document files into JSON trees
#[derive(Debug, Default)]
pub struct SchemaLoader {
    parser: SchemaParser,
}

impl SchemaLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON Schema; every failure is reported as a schema load error
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_schema(&self, path: &Path) -> LoaderResult<Value> {
        let schema = self
            .parser
            .parse_file(path)
            .and_then(|schema| {
                self.parser.validate_schema_root(&schema, path)?;
                Ok(schema)
            })
            .map_err(LoaderError::in_schema)?;

        debug!("Schema loaded");
        Ok(schema)
    }

    /// Load the document to validate; failures are reported as document load errors
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_document(&self, path: &Path) -> LoaderResult<Value> {
        let document = self.parser.parse_file(path).map_err(LoaderError::in_document)?;

        let features = feature_count(&document);
        debug!(features, "Document loaded");
        Ok(document)
    }
}

/// Number of entries in a document's `features` array, zero when absent
pub fn feature_count(document: &Value) -> usize {
    document
        .get("features")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
