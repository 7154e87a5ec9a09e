//! Per-feature reduction of JSON Schema validation errors
//!
//! A Draft 7 validator reports every violated constraint, including each failed
//! branch of a combinator. This module turns that stream into one message per
//! offending feature:
//!
//! - **locator**: which `features[i]` an error belongs to
//! - **ranking**: grouping by feature and picking the most specific error
//! - **render**: a clean single-line message for the chosen error
//! - **pipeline**: the drain, group, select, render and sort sequence
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod feature_collection;
pub mod locator;
pub mod path;
pub mod pipeline;
pub mod ranking;
pub mod render;

// Re-export commonly used types
pub use base::{Draft7Validator, ErrorSource};
pub use error::{FeatureIndex, Keyword, RawError, ReportEntry, ValidationReport};
pub use feature_collection::FeatureCollectionValidator;
pub use locator::locate;
pub use path::PathSegment;
pub use pipeline::{collect_feature_errors, reduce_errors, validate_document};
pub use ranking::{group, select_best, ErrorGroups};
pub use render::render;
