//! Group raw errors per feature and pick one representative for each
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FeatureIndex, RawError};
use crate::validation::locator::locate;
use std::collections::BTreeMap;

/// Raw errors bucketed by feature, encounter order kept within each bucket
#[derive(Debug, Clone, Default)]
pub struct ErrorGroups {
    buckets: BTreeMap<FeatureIndex, Vec<RawError>>,
}

impl ErrorGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error to the bucket of the feature it belongs to
    pub fn insert(&mut self, err: RawError) {
        self.buckets.entry(locate(&err)).or_default().push(err);
    }

    /// Errors recorded for one feature
    pub fn get(&self, index: FeatureIndex) -> Option<&[RawError]> {
        self.buckets.get(&index).map(Vec::as_slice)
    }

    /// Number of distinct features (document-level counts as one)
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no error was recorded
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate buckets in feature order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureIndex, &[RawError])> {
        self.buckets.iter().map(|(index, errs)| (*index, errs.as_slice()))
    }
}

impl FromIterator<RawError> for ErrorGroups {
    fn from_iter<I: IntoIterator<Item = RawError>>(iter: I) -> Self {
        let mut groups = Self::new();
        for err in iter {
            groups.insert(err);
        }
        groups
    }
}

impl IntoIterator for ErrorGroups {
    type Item = (FeatureIndex, Vec<RawError>);
    type IntoIter = std::collections::btree_map::IntoIter<FeatureIndex, Vec<RawError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Group errors by the feature they belong to
pub fn group<I>(errors: I) -> ErrorGroups
where
    I: IntoIterator<Item = RawError>,
{
    errors.into_iter().collect()
}

/// Sort key: keyword tier first, then message length in characters
pub fn rank(err: &RawError) -> (u8, usize) {
    (err.keyword.priority_tier(), err.message.chars().count())
}

/// Pick the most specific error of a bucket
///
/// Ties keep the error encountered first. Returns `None` for an empty slice.
pub fn select_best(errs: &[RawError]) -> Option<&RawError> {
    // min_by_key returns the first of several equal minimums
    errs.iter().min_by_key(|err| rank(err))
}
