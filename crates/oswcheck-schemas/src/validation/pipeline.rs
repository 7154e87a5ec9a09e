//! Reduce a validator's raw error stream to one message per feature
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::base::ErrorSource;
use crate::validation::error::{RawError, ReportEntry, ValidationReport};
use crate::validation::ranking::{group, select_best};
use crate::validation::render::render;
use serde_json::Value;
use tracing::{debug, trace};

/// Validate `document` and return the sorted per-feature report
///
/// The validator's error stream is always drained completely before any
/// grouping, so arrival order never affects the result.
pub fn collect_feature_errors<V>(validator: &V, document: &Value, schema: &Value) -> Vec<ReportEntry>
where
    V: ErrorSource + ?Sized,
{
    let raw_errors: Vec<RawError> = validator.iter_errors(document).collect();
    reduce_errors(raw_errors, schema)
}

/// Like [`collect_feature_errors`], also counting the raw errors
pub fn validate_document<V>(validator: &V, document: &Value, schema: &Value) -> ValidationReport
where
    V: ErrorSource + ?Sized,
{
    let raw_errors: Vec<RawError> = validator.iter_errors(document).collect();
    let raw_error_count = raw_errors.len();
    let entries = reduce_errors(raw_errors, schema);

    debug!(
        raw_errors = raw_error_count,
        entries = entries.len(),
        "Reduced validation errors"
    );

    ValidationReport {
        entries,
        raw_error_count,
    }
}

/// Group, rank and render raw errors into sorted report entries
pub fn reduce_errors(raw_errors: Vec<RawError>, schema: &Value) -> Vec<ReportEntry> {
    let groups = group(raw_errors);

    let mut entries: Vec<ReportEntry> = groups
        .iter()
        .filter_map(|(index, errs)| {
            let best = select_best(errs)?;
            trace!(
                feature = index.as_i64(),
                candidates = errs.len(),
                keyword = %best.keyword,
                path = %best.instance_pointer(),
                "Selected representative error"
            );
            Some(ReportEntry::new(index, render(best, schema)))
        })
        .collect();

    entries.sort();
    entries
}
