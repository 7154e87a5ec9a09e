//! Property-based tests for error reduction
//!
//! These tests verify that the per-feature report keeps its shape
//! across a wide range of raw error sets and documents.

use proptest::prelude::*;
use serde_json::{json, Value};
use oswcheck_schemas::validation::{locate, FeatureIndex};
use oswcheck_schemas::{
    generate_samples, reduce_errors, FeatureCollectionValidator, Keyword, PathSegment, RawError,
    SampleOptions,
};
use std::collections::BTreeSet;

const ALLOWED_HIGHWAYS: [&str; 3] = ["footway", "steps", "pedestrian"];

/// Strategy for keyword names, weighted toward the ranked ones
fn keyword_strategy() -> impl Strategy<Value = Keyword> {
    prop_oneof![
        Just("enum"),
        Just("type"),
        Just("required"),
        Just("const"),
        Just("pattern"),
        Just("minimum"),
        Just("maximum"),
        Just("anyOf"),
        Just("oneOf"),
        Just("dependencies"),
    ]
    .prop_map(Keyword::from_name)
}

/// Strategy for instance paths, some inside `features[i]` and some not
fn instance_path_strategy() -> impl Strategy<Value = Vec<PathSegment>> {
    let suffix = proptest::collection::vec(
        prop_oneof![
            "[a-z]{1,8}".prop_map(PathSegment::Key),
            (0usize..4).prop_map(PathSegment::Index),
        ],
        0..4,
    );

    (proptest::option::of(0usize..6), suffix).prop_map(|(feature, suffix)| {
        let mut path = Vec::new();
        if let Some(i) = feature {
            path.push(PathSegment::key("features"));
            path.push(PathSegment::Index(i));
        }
        path.extend(suffix);
        path
    })
}

/// Strategy for raw errors with possibly multi-line messages
fn raw_error_strategy() -> impl Strategy<Value = RawError> {
    (
        keyword_strategy(),
        "[a-zA-Z0-9 \"\n]{0,60}",
        instance_path_strategy(),
        proptest::option::of(proptest::collection::vec("[a-z]{1,6}", 0..4)),
    )
        .prop_map(|(keyword, message, path, options)| {
            let err = RawError::new(keyword, message)
                .at(path)
                .with_instance(json!("value"));
            match options {
                Some(options) => err.with_keyword_value(json!(options)),
                None => err,
            }
        })
}

/// Strategy for highway tags, some allowed and some not
fn highway_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::sample::select(ALLOWED_HIGHWAYS.to_vec()).prop_map(|h| json!(h)),
        "[a-z_]{1,12}".prop_map(Value::String),
        any::<i32>().prop_map(|n| json!(n)),
    ]
}

fn highway_schema() -> Value {
    json!({
        "properties": {
            "features": {
                "items": {
                    "properties": {
                        "properties": {
                            "properties": {"highway": {"enum": ALLOWED_HIGHWAYS}}
                        }
                    }
                }
            }
        }
    })
}

/// Crossing tags with a bounded number field, an enum and a boolean
fn crossing_schema() -> Value {
    json!({
        "properties": {
            "features": {"items": {"$ref": "#/definitions/Crossing"}}
        },
        "definitions": {
            "CrossingFields": {
                "required": ["crossing", "incline", "tactile_paving"],
                "properties": {
                    "crossing": {"enum": ["marked", "unmarked"]},
                    "incline": {"type": "number", "minimum": -1, "maximum": 1},
                    "tactile_paving": {"type": ["null", "boolean"]}
                }
            },
            "Crossing": {
                "required": ["geometry", "properties"],
                "properties": {
                    "geometry": {"properties": {"type": {"enum": ["LineString"]}}},
                    "properties": {"$ref": "#/definitions/CrossingFields"}
                }
            }
        }
    })
}

proptest! {
    #[test]
    fn test_one_entry_per_distinct_feature(errors in proptest::collection::vec(raw_error_strategy(), 0..30)) {
        let distinct: BTreeSet<FeatureIndex> = errors.iter().map(locate).collect();
        let entries = reduce_errors(errors, &json!({}));

        prop_assert_eq!(entries.len(), distinct.len());
        let reported: BTreeSet<i64> = entries.iter().map(|e| e.feature_index).collect();
        let expected: BTreeSet<i64> = distinct.iter().map(FeatureIndex::as_i64).collect();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn test_entries_sorted_and_single_line(errors in proptest::collection::vec(raw_error_strategy(), 0..30)) {
        let entries = reduce_errors(errors, &json!({}));

        for pair in entries.windows(2) {
            prop_assert!(pair[0].feature_index < pair[1].feature_index);
        }
        for entry in &entries {
            prop_assert!(!entry.error.contains('\n'), "multi-line error: {:?}", entry.error);
        }
    }

    #[test]
    fn test_output_is_byte_identical_across_runs(errors in proptest::collection::vec(raw_error_strategy(), 0..30)) {
        let first = serde_json::to_string(&reduce_errors(errors.clone(), &json!({}))).unwrap();
        let second = serde_json::to_string(&reduce_errors(errors, &json!({}))).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_interleaving_across_features_is_irrelevant(errors in proptest::collection::vec(raw_error_strategy(), 0..30)) {
        // a stable sort regroups the errors by feature, descending, without
        // changing the order inside any one feature
        let mut regrouped = errors.clone();
        regrouped.sort_by_key(|err| std::cmp::Reverse(locate(err)));

        let original = reduce_errors(errors, &json!({}));
        let reordered = reduce_errors(regrouped, &json!({}));
        prop_assert_eq!(original, reordered);
    }

    #[test]
    fn test_reported_features_are_the_invalid_ones(highways in proptest::collection::vec(highway_strategy(), 0..10)) {
        let validator = FeatureCollectionValidator::from_value(highway_schema()).unwrap();
        let features: Vec<Value> = highways
            .iter()
            .map(|h| json!({"type": "Feature", "properties": {"highway": h}}))
            .collect();
        let doc = json!({"type": "FeatureCollection", "features": features});

        let expected: Vec<i64> = highways
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.as_str().is_some_and(|h| ALLOWED_HIGHWAYS.contains(&h)))
            .map(|(i, _)| i as i64)
            .collect();

        let entries = validator.collect_errors(&doc);
        let reported: Vec<i64> = entries.iter().map(|e| e.feature_index).collect();
        prop_assert_eq!(reported, expected);

        for entry in &entries {
            prop_assert!(entry.error.ends_with("is not one of \"footway\", \"steps\""));
        }
    }

    #[test]
    fn test_samples_split_cleanly_for_any_seed(seed in any::<u64>(), count in 1usize..6) {
        let schema = crossing_schema();
        let options = SampleOptions {
            tags: vec!["Crossing".to_string()],
            features_per_tag: count,
            seed,
        };
        let samples = generate_samples(&schema, &options).unwrap();
        let validator = FeatureCollectionValidator::from_value(schema).unwrap();

        prop_assert!(validator.validate(&samples.valid).is_valid());

        let reported: Vec<i64> = validator
            .collect_errors(&samples.invalid)
            .iter()
            .map(|e| e.feature_index)
            .collect();
        prop_assert_eq!(reported, (0..count as i64).collect::<Vec<_>>());
    }
}
