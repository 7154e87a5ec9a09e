//! OSWCheck Schemas - GeoJSON feature collection validation
//!
//! This crate validates GeoJSON `FeatureCollection` documents against a JSON
//! Schema (Draft 7) and reduces the validator's output to a compact report:
//! one representative error per offending feature, chosen by specificity.
//!
//! ## Features
//!
//! - **Draft 7 Validation**: constraint checking through the `jsonschema` crate
//! - **Per-Feature Reduction**: errors grouped by `features[i]`, one kept per group
//! - **Compact Messages**: `enum` and `anyOf` failures rewritten into short text
//! - **Loading**: JSON, GeoJSON and YAML schema and document files
//! - **Samples**: seeded valid and invalid fixtures generated from schema definitions
//!
//! ## Quick Start
//!
//! ```rust
//! use oswcheck_schemas::FeatureCollectionValidator;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "properties": {
//!         "features": {
//!             "items": {
//!                 "properties": {
//!                     "properties": {
//!                         "properties": {"highway": {"enum": ["footway", "steps", "crossing"]}}
//!                     }
//!                 }
//!             }
//!         }
//!     }
//! });
//! let validator = FeatureCollectionValidator::from_value(schema).unwrap();
//!
//! let document = json!({
//!     "type": "FeatureCollection",
//!     "features": [
//!         {"type": "Feature", "properties": {"highway": "footway"}},
//!         {"type": "Feature", "properties": {"highway": "motorway"}}
//!     ]
//! });
//!
//! let report = validator.validate(&document);
//! assert_eq!(report.entries.len(), 1);
//! assert_eq!(report.entries[0].feature_index, 1);
//! assert_eq!(report.entries[0].error, "\"motorway\" is not one of \"footway\", \"steps\"");
//! ```
//!
//! ## Ranking
//!
//! Within a feature, errors are ordered by keyword tier and then by message
//! length; the first one is reported:
//!
//! - `enum`
//! - `type`, `required`, `const`
//! - `pattern`, `minimum`, `maximum`
//! - everything else, including `anyOf` and `oneOf`
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod sample;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{feature_count, LoaderError, LoaderResult, SchemaLoader};
pub use sample::{generate_samples, SampleError, SampleOptions, SampleSet};
pub use validation::{
    collect_feature_errors, reduce_errors, validate_document, Draft7Validator, ErrorSource,
    FeatureCollectionValidator, FeatureIndex, Keyword, PathSegment, RawError, ReportEntry,
    ValidationReport,
};
