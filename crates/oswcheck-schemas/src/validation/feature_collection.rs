//! GeoJSON `FeatureCollection` validation against a loaded schema
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{LoaderResult, SchemaLoader};
use crate::validation::base::Draft7Validator;
use crate::validation::error::{ReportEntry, ValidationReport};
use crate::validation::pipeline::{collect_feature_errors, validate_document};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

/// A compiled Draft 7 schema ready to validate feature collections
///
/// Holds no mutable state; one instance can validate any number of documents.
#[derive(Debug)]
pub struct FeatureCollectionValidator {
    validator: Draft7Validator,
}

impl FeatureCollectionValidator {
    /// Compile an in-memory schema
    pub fn from_value(schema: Value) -> LoaderResult<Self> {
        Ok(Self {
            validator: Draft7Validator::new(Arc::new(schema))?,
        })
    }

    /// Load and compile a schema file
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        let schema = SchemaLoader::new().load_schema(path)?;
        Self::from_value(schema)
    }

    /// Get the loaded schema
    pub fn schema(&self) -> &Value {
        self.validator.schema()
    }

    /// Sorted per-feature errors for `document`
    pub fn collect_errors(&self, document: &Value) -> Vec<ReportEntry> {
        collect_feature_errors(&self.validator, document, self.schema())
    }

    /// Validate `document`, keeping raw error statistics
    #[instrument(skip_all)]
    pub fn validate(&self, document: &Value) -> ValidationReport {
        validate_document(&self.validator, document, self.schema())
    }
}
