//! Map raw errors to the feature they belong to
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FeatureIndex, RawError};
use crate::validation::path::PathSegment;

/// Member name of the feature array in a GeoJSON `FeatureCollection`
pub const FEATURES_KEY: &str = "features";

/// Locate the feature an error belongs to
pub fn locate(err: &RawError) -> FeatureIndex {
    locate_path(&err.instance_path)
}

/// Find the first `features` key immediately followed by an index
///
/// Only the first such pair counts; nested collections further down the path
/// do not override it.
pub fn locate_path(path: &[PathSegment]) -> FeatureIndex {
    path.windows(2)
        .find_map(|pair| match (&pair[0], &pair[1]) {
            (PathSegment::Key(key), PathSegment::Index(index)) if key == FEATURES_KEY => {
                Some(FeatureIndex::Feature(*index))
            }
            _ => None,
        })
        .unwrap_or(FeatureIndex::Document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_feature_path() {
        assert_eq!(
            locate_path(&path!["features", 2, "properties", "highway"]),
            FeatureIndex::Feature(2)
        );
    }

    #[test]
    fn test_root_level_error() {
        assert_eq!(locate_path(&[]), FeatureIndex::Document);
        assert_eq!(locate_path(&path!["type"]), FeatureIndex::Document);
    }

    #[test]
    fn test_features_without_index() {
        // `features` itself failing (e.g. wrong type) is document-level
        assert_eq!(locate_path(&path!["features"]), FeatureIndex::Document);
        assert_eq!(locate_path(&path!["features", "length"]), FeatureIndex::Document);
    }

    #[test]
    fn test_first_match_wins() {
        let nested = path!["features", 4, "properties", "features", 9];
        assert_eq!(locate_path(&nested), FeatureIndex::Feature(4));
    }

    #[test]
    fn test_pair_must_be_adjacent() {
        let path = path!["features", "x", 3];
        assert_eq!(locate_path(&path), FeatureIndex::Document);

        let later = path!["meta", "features", 1];
        assert_eq!(locate_path(&later), FeatureIndex::Feature(1));
    }
}
