//! Property values and geometries drawn from a schema
//!
//! Values follow the property schema closely enough to pass validation:
//! enums cycle through their options, numbers stay inside `minimum` and
//! `maximum`, and a few identifier fields get recognisable names.
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use rand::Rng;
use serde_json::{json, Value};

/// Geometry types a feature can be generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    /// Map a GeoJSON geometry type name to its variant
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Point" => Some(Self::Point),
            "LineString" => Some(Self::LineString),
            "Polygon" => Some(Self::Polygon),
            "MultiPolygon" => Some(Self::MultiPolygon),
            _ => None,
        }
    }

    /// GeoJSON type name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
        }
    }

    /// A different geometry type, used to break features without properties
    pub fn swapped(self) -> Self {
        match self {
            Self::Point => Self::LineString,
            _ => Self::Point,
        }
    }

    /// Random coordinates of this shape inside a small bounding box
    pub fn coordinates<R: Rng>(self, rng: &mut R) -> Value {
        let lon = -122.35 + rng.gen::<f64>() * 0.05;
        let lat = 47.60 + rng.gen::<f64>() * 0.02;

        match self {
            Self::Point => json!([lon, lat]),
            Self::LineString => {
                let dx = 0.001 + rng.gen::<f64>() * 0.001;
                let dy = 0.001 + rng.gen::<f64>() * 0.001;
                json!([[lon, lat], [lon + dx, lat + dy]])
            }
            Self::Polygon => json!([ring(lon, lat, rng)]),
            Self::MultiPolygon => json!([[ring(lon, lat, rng)]]),
        }
    }

    /// A GeoJSON geometry object of this kind
    pub fn geometry<R: Rng>(self, rng: &mut R) -> Value {
        json!({"type": self.as_str(), "coordinates": self.coordinates(rng)})
    }
}

/// Closed rectangular ring anchored at (`lon`, `lat`)
fn ring<R: Rng>(lon: f64, lat: f64, rng: &mut R) -> Value {
    let dx = 0.0008 + rng.gen::<f64>() * 0.0006;
    let dy = 0.0008 + rng.gen::<f64>() * 0.0006;
    json!([
        [lon, lat],
        [lon + dx, lat],
        [lon + dx, lat + dy],
        [lon, lat + dy],
        [lon, lat]
    ])
}

/// Value for the `ordinal`-th feature's property `name`
///
/// Enums cycle through their options so consecutive features differ.
/// Everything else is sampled from the declared type.
pub fn property_value<R: Rng>(name: &str, schema: &Value, ordinal: usize, rng: &mut R) -> Value {
    match schema.get("enum").and_then(Value::as_array) {
        Some(options) if !options.is_empty() => options[ordinal % options.len()].clone(),
        _ => typed_value(name, schema, ordinal, rng),
    }
}

fn typed_value<R: Rng>(name: &str, schema: &Value, ordinal: usize, rng: &mut R) -> Value {
    match schema_type(schema) {
        "string" => Value::String(string_value(name, ordinal)),
        "number" => {
            let (min, max) = bounds(schema);
            json!(round_to(min + (max - min) * rng.gen::<f64>(), 3))
        }
        "integer" => {
            let (min, max) = bounds(schema);
            json!((min + (max - min) * rng.gen::<f64>()).floor() as i64)
        }
        "boolean" => json!(rng.gen::<f64>() > 0.5),
        "array" => array_value(schema, ordinal, rng),
        "object" => json!({}),
        _ => Value::String(format!("example-{}", ordinal)),
    }
}

/// Declared type, preferring the first non-null member of a type list
fn schema_type(schema: &Value) -> &str {
    match schema.get("type") {
        Some(Value::String(name)) => name,
        Some(Value::Array(names)) => {
            let mut names = names.iter().filter_map(Value::as_str);
            let first = names.clone().next();
            names.find(|name| *name != "null").or(first).unwrap_or("string")
        }
        _ => "string",
    }
}

fn string_value(name: &str, ordinal: usize) -> String {
    match name {
        "_id" => format!("id-{:04}", ordinal),
        "_u_id" => format!("node-u-{:04}", ordinal),
        "_v_id" => format!("node-v-{:04}", ordinal),
        "name" => format!("Example Name {}", ordinal + 1),
        _ => format!("example-{}", ordinal),
    }
}

/// `minimum` and `maximum`, defaulting to a span of ten from the minimum
fn bounds(schema: &Value) -> (f64, f64) {
    let min = schema.get("minimum").and_then(Value::as_f64).unwrap_or(0.0);
    let max = schema.get("maximum").and_then(Value::as_f64).unwrap_or(min + 10.0);
    (min, max)
}

fn array_value<R: Rng>(schema: &Value, ordinal: usize, rng: &mut R) -> Value {
    let len = 1 + (rng.gen::<f64>() * 2.0) as usize;

    let items = match schema.get("items") {
        Some(Value::Array(_)) | None => return json!([]),
        Some(items) => items,
    };

    match items.get("type").and_then(Value::as_str) {
        Some("string") => (0..len).map(|k| json!(format!("ex-{}-{}", ordinal, k))).collect(),
        Some("number") => (0..len)
            .map(|_| json!(round_to(rng.gen::<f64>() * 10.0, 2)))
            .collect(),
        _ => json!([]),
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
