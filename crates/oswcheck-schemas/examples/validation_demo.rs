//! Validation demonstration example
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use oswcheck_schemas::validation::{Draft7Validator, ErrorSource};
use oswcheck_schemas::FeatureCollectionValidator;
use serde_json::{json, Value};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== OSWCheck Validation Demo ===\n");

    let schema = sidewalk_schema();
    let document = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                "properties": {"highway": "footway", "footway": "sidewalk"}
            },
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                "properties": {"highway": "motorway", "width": "wide"}
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [0.5, 0.5]},
                "properties": {}
            }
        ]
    });

    // What the validator reports on its own
    println!("--- Raw validator output ---");
    let raw = Draft7Validator::new(Arc::new(schema.clone()))?;
    for err in raw.iter_errors(&document) {
        println!("   {}", err);
    }

    println!();

    // One error per feature
    println!("--- Reduced report ---");
    let validator = FeatureCollectionValidator::from_value(schema)?;
    let report = validator.validate(&document);
    println!(
        "   {} raw errors reduced to {} entries",
        report.raw_error_count,
        report.entries.len()
    );
    println!("{}", serde_json::to_string_pretty(&report.entries)?);

    Ok(())
}

fn sidewalk_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["type", "features"],
        "properties": {
            "features": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["geometry", "properties"],
                    "properties": {
                        "properties": {
                            "type": "object",
                            "properties": {
                                "highway": {"enum": ["footway", "steps", "pedestrian", "living_street"]},
                                "width": {"type": "number"}
                            },
                            "anyOf": [
                                {"required": ["highway"]},
                                {"required": ["amenity"]},
                                {"allOf": [{"required": ["barrier"]}]}
                            ]
                        }
                    }
                }
            }
        }
    })
}
