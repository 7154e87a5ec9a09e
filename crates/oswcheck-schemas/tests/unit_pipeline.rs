//! Validation tests running the real Draft 7 validator
//!
//! These tests cover the reduction of raw validator output to one message
//! per feature: enum and anyOf rewriting, tier ranking, document-level
//! errors and report ordering.

use serde_json::{json, Value};
use oswcheck_schemas::{FeatureCollectionValidator, ReportEntry};

/// A small OpenSidewalks-like schema
fn sidewalk_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["type", "features"],
        "properties": {
            "type": {"const": "FeatureCollection"},
            "features": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["type", "geometry", "properties"],
                    "properties": {
                        "type": {"const": "Feature"},
                        "geometry": {"type": "object"},
                        "properties": {
                            "type": "object",
                            "properties": {
                                "highway": {"enum": ["footway", "steps", "pedestrian", "living_street"]},
                                "width": {"type": "number", "minimum": 0},
                                "incline": {"type": "number", "minimum": -1, "maximum": 1},
                                "_id": {"type": "string", "pattern": "^[0-9a-f]+$"}
                            }
                        }
                    }
                }
            }
        }
    })
}

fn feature(properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
        "properties": properties
    })
}

fn collection(features: Vec<Value>) -> Value {
    json!({"type": "FeatureCollection", "features": features})
}

fn entry(feature_index: i64, error: &str) -> ReportEntry {
    ReportEntry {
        feature_index,
        error: error.to_string(),
    }
}

#[cfg(test)]
mod valid_documents {
    use super::*;

    #[test]
    fn test_valid_collection_yields_empty_report() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = collection(vec![
            feature(json!({"highway": "footway", "width": 1.5})),
            feature(json!({"highway": "steps", "incline": 0.3})),
        ]);

        let report = validator.validate(&doc);
        assert!(report.is_valid());
        assert_eq!(serde_json::to_string(&report.entries).unwrap(), "[]");
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        assert!(validator.collect_errors(&collection(vec![])).is_empty());
    }
}

#[cfg(test)]
mod enum_rendering {
    use super::*;

    #[test]
    fn test_enum_shows_first_two_candidates_only() {
        let schema = json!({
            "properties": {"features": {"items": {"properties": {"properties": {"properties": {
                "highway": {"enum": ["bar", "baz", "qux"]}
            }}}}}}
        });
        let validator = FeatureCollectionValidator::from_value(schema).unwrap();
        let doc = collection(vec![feature(json!({"highway": "foo"}))]);

        assert_eq!(
            validator.collect_errors(&doc),
            vec![entry(0, "\"foo\" is not one of \"bar\", \"baz\"")]
        );
    }

    #[test]
    fn test_non_ascii_values_stay_unescaped() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = collection(vec![feature(json!({"highway": "café"}))]);

        let entries = validator.collect_errors(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].error, "\"café\" is not one of \"footway\", \"steps\"");

        let output = serde_json::to_string(&entries).unwrap();
        assert!(output.contains("café"));
    }

    #[test]
    fn test_enum_beats_type_on_same_feature() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = collection(vec![feature(json!({"highway": "motorway", "width": "wide"}))]);

        assert_eq!(
            validator.collect_errors(&doc),
            vec![entry(0, "\"motorway\" is not one of \"footway\", \"steps\"")]
        );
    }

    #[test]
    fn test_forbidden_property_named_enum_ranks_below_required() {
        let schema = json!({
            "properties": {"features": {"items": {
                "required": ["geometry"],
                "properties": {"enum": false, "type": false}
            }}}
        });
        let validator = FeatureCollectionValidator::from_value(schema).unwrap();
        let doc = collection(vec![json!({"enum": 1, "type": 2})]);

        assert_eq!(
            validator.collect_errors(&doc),
            vec![entry(0, "\"geometry\" is a required property")]
        );
    }
}

#[cfg(test)]
mod any_of_rendering {
    use super::*;

    fn any_of_schema() -> Value {
        json!({
            "properties": {
                "features": {
                    "items": {
                        "properties": {"properties": {"type": "object"}},
                        "anyOf": [
                            {"required": ["a"]},
                            {"required": ["b", "c"]},
                            {"allOf": [{"required": ["c"]}]}
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_any_of_lists_union_of_required_fields() {
        let validator = FeatureCollectionValidator::from_value(any_of_schema()).unwrap();
        let doc = collection(vec![json!({"properties": {}})]);

        assert_eq!(
            validator.collect_errors(&doc),
            vec![entry(0, "must include one of: a, b, c")]
        );
    }

    #[test]
    fn test_type_error_beats_any_of() {
        let validator = FeatureCollectionValidator::from_value(any_of_schema()).unwrap();
        let doc = collection(vec![json!({"properties": 5})]);

        let report = validator.validate(&doc);
        assert_eq!(report.entries.len(), 1);
        assert!(report.raw_error_count >= 2);
        assert!(
            report.entries[0].error.contains("is not of type"),
            "unexpected message: {}",
            report.entries[0].error
        );
    }

    #[test]
    fn test_any_of_without_required_keeps_raw_message() {
        let schema = json!({
            "properties": {"features": {"items": {
                "anyOf": [{"type": "string"}, {"type": "number"}]
            }}}
        });
        let validator = FeatureCollectionValidator::from_value(schema).unwrap();
        let doc = collection(vec![json!({})]);

        let entries = validator.collect_errors(&doc);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].error.starts_with("must include one of"));
        assert!(!entries[0].error.contains('\n'));
    }
}

#[cfg(test)]
mod grouping_and_ordering {
    use super::*;

    #[test]
    fn test_document_level_error_is_minus_one() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = json!({"features": []});

        let entries = validator.collect_errors(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].feature_index, -1);
        assert!(entries[0].error.contains("\"type\""));
    }

    #[test]
    fn test_one_entry_per_feature_sorted_by_index() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = json!({
            "type": "Collection",
            "features": [
                feature(json!({"highway": "footway"})),
                feature(json!({"width": -2, "incline": 4})),
                feature(json!({"highway": "footway"})),
                feature(json!({"_id": "XYZ", "highway": "bridleway"})),
                {"type": "Feature", "properties": {}}
            ]
        });

        let entries = validator.collect_errors(&doc);
        let indices: Vec<i64> = entries.iter().map(|e| e.feature_index).collect();
        assert_eq!(indices, vec![-1, 1, 3, 4]);

        // enum outranks the pattern failure on the same feature
        assert_eq!(entries[2].error, "\"bridleway\" is not one of \"footway\", \"steps\"");
        // required is tier 1, the only error on feature 4
        assert!(entries[3].error.contains("geometry"));
    }

    #[test]
    fn test_report_is_reproducible() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = collection(vec![
            feature(json!({"highway": 1, "width": "x", "incline": 9})),
            feature(json!({"_id": "Q"})),
            json!({"geometry": null}),
        ]);

        let first = serde_json::to_string(&validator.collect_errors(&doc)).unwrap();
        let second = serde_json::to_string(&validator.collect_errors(&doc)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_shape() {
        let validator = FeatureCollectionValidator::from_value(sidewalk_schema()).unwrap();
        let doc = collection(vec![feature(json!({"highway": "foo"}))]);

        let output = serde_json::to_value(validator.collect_errors(&doc)).unwrap();
        assert_eq!(
            output,
            json!([{"featureIndex": 0, "error": "\"foo\" is not one of \"footway\", \"steps\""}])
        );
    }
}
