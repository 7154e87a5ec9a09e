//! Schema-driven generation of valid and invalid feature collections
//!
//! Each requested tag names an entry under the schema's `definitions`. Its
//! `geometry` subschema decides the geometry type and its `properties`
//! subschema decides which fields every sample carries. For each valid
//! feature a twin is produced that breaks exactly one constraint, rotating
//! through the tag's enum fields first and its required fields second.
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::sample::error::{SampleError, SampleResult};
use crate::sample::values::{property_value, GeometryKind};
use crate::validation::path::resolve_reference;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Identifier fields and the prefix of their generated values
const ID_FIELDS: [(&str, &str); 3] = [("_id", "id"), ("_u_id", "node-u"), ("_v_id", "node-v")];

/// Stands in for subschemas a definition leaves out
static ABSENT: Value = Value::Null;

static GEOJSON_REF_REGEX: OnceLock<Regex> = OnceLock::new();

fn geojson_ref_regex() -> &'static Regex {
    GEOJSON_REF_REGEX.get_or_init(|| {
        Regex::new(r"GeoJSON\.(Point|LineString|Polygon|MultiPolygon)").expect("static regex is valid")
    })
}

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOptions {
    /// Definition names to draw features from, in output order
    pub tags: Vec<String>,
    /// Features generated for each tag
    pub features_per_tag: usize,
    /// Seed for coordinates and sampled values
    pub seed: u64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            features_per_tag: 1,
            seed: 0,
        }
    }
}

impl SampleOptions {
    /// Options for the given tags with one feature each
    pub fn for_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// A pair of feature collections with matching feature order
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    /// Every feature satisfies its definition
    pub valid: Value,
    /// Feature `i` is feature `i` of `valid` with one constraint broken
    pub invalid: Value,
}

/// Generates sample documents from a schema's definitions
#[derive(Debug)]
pub struct SampleGenerator<'a> {
    schema: &'a Value,
    definitions: &'a Map<String, Value>,
}

impl<'a> SampleGenerator<'a> {
    /// Prepare a generator for `schema`, which must carry `definitions`
    pub fn new(schema: &'a Value) -> SampleResult<Self> {
        let definitions = schema
            .get("definitions")
            .and_then(Value::as_object)
            .ok_or(SampleError::MissingDefinitions)?;
        Ok(Self {
            schema,
            definitions,
        })
    }

    /// Generate `options.features_per_tag` features per tag, plus their broken twins
    ///
    /// The same options always yield the same documents.
    #[instrument(skip_all, fields(tags = options.tags.len(), seed = options.seed))]
    pub fn generate(&self, options: &SampleOptions) -> SampleResult<SampleSet> {
        if options.tags.is_empty() {
            return Err(SampleError::NoTags);
        }

        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (tag_index, tag) in options.tags.iter().enumerate() {
            let plan = self.plan(tag)?;
            debug!(
                %tag,
                geometry = plan.geometry.as_str(),
                required = plan.fields.len(),
                enums = plan.enum_fields.len(),
                "Sampling tag"
            );

            for ordinal in 0..options.features_per_tag {
                let feature = plan.feature(tag, tag_index, ordinal, &mut rng);
                invalid.push(plan.broken(feature.clone(), ordinal, &mut rng));
                valid.push(feature);
            }
        }

        Ok(SampleSet {
            valid: feature_collection(valid),
            invalid: feature_collection(invalid),
        })
    }

    fn plan(&self, tag: &str) -> SampleResult<TagPlan<'a>> {
        let definition = self
            .definitions
            .get(tag)
            .ok_or_else(|| SampleError::unknown_tag(tag))?;

        let fields = match definition.pointer("/properties/properties") {
            Some(node) => self.deref(node)?,
            None => &ABSENT,
        };
        let declared = fields.get("properties").unwrap_or(&ABSENT);

        let mut plan = TagPlan {
            geometry: self.geometry_kind(definition),
            fields: Vec::new(),
            enum_fields: Vec::new(),
        };

        for name in required_names(fields) {
            let schema = self.deref(declared.get(name).unwrap_or(&ABSENT))?;
            if schema.get("enum").and_then(Value::as_array).is_some_and(|o| !o.is_empty()) {
                plan.enum_fields.push(name);
            }
            plan.fields.push((name, schema));
        }

        Ok(plan)
    }

    /// Geometry type from the definition's `geometry` subschema
    ///
    /// A referenced geometry schema is consulted first; when the reference
    /// is dangling, a `GeoJSON.<Type>` name inside it still counts.
    fn geometry_kind(&self, definition: &Value) -> GeometryKind {
        let node = definition.pointer("/properties/geometry").unwrap_or(&ABSENT);

        if let Some(Value::String(reference)) = node.get("$ref") {
            let kind = match resolve_reference(self.schema, reference) {
                Some(target) => first_geometry_type(target),
                None => geojson_ref_regex()
                    .captures(reference)
                    .and_then(|captures| GeometryKind::from_name(&captures[1])),
            };
            if let Some(kind) = kind {
                return kind;
            }
        }

        first_geometry_type(node).unwrap_or(GeometryKind::Point)
    }

    /// Follow a `$ref` one level; other nodes are returned unchanged
    fn deref(&self, node: &'a Value) -> SampleResult<&'a Value> {
        match node.get("$ref") {
            Some(Value::String(reference)) => {
                resolve_reference(self.schema, reference).ok_or_else(|| {
                    SampleError::BrokenReference {
                        reference: reference.clone(),
                    }
                })
            }
            _ => Ok(node),
        }
    }
}

/// Generate samples for `options` from `schema`
pub fn generate_samples(schema: &Value, options: &SampleOptions) -> SampleResult<SampleSet> {
    SampleGenerator::new(schema)?.generate(options)
}

/// Everything needed to build the features of one tag
#[derive(Debug)]
struct TagPlan<'a> {
    geometry: GeometryKind,
    /// Required fields with their resolved schemas
    fields: Vec<(&'a str, &'a Value)>,
    /// Required fields constrained by a non-empty enum
    enum_fields: Vec<&'a str>,
}

impl TagPlan<'_> {
    fn feature(&self, tag: &str, tag_index: usize, ordinal: usize, rng: &mut StdRng) -> Value {
        let mut properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, schema)| (name.to_string(), property_value(name, schema, ordinal, rng)))
            .collect();

        let tag_name = tag.to_lowercase();
        for (field, prefix) in ID_FIELDS {
            if properties.contains_key(field) {
                let id = format!("{}-{}-{}-{}", prefix, tag_name, tag_index, ordinal);
                properties.insert(field.to_string(), Value::String(id));
            }
        }

        json!({
            "type": "Feature",
            "geometry": self.geometry.geometry(rng),
            "properties": properties,
        })
    }

    /// Break one constraint of `feature`
    fn broken(&self, mut feature: Value, ordinal: usize, rng: &mut StdRng) -> Value {
        if self.fields.is_empty() {
            feature["geometry"] = self.geometry.swapped().geometry(rng);
        }

        if let Some(properties) = feature.get_mut("properties").and_then(Value::as_object_mut) {
            if let Some(field) = pick(&self.enum_fields, ordinal) {
                properties.insert(field.to_string(), json!(format!("__INVALID_ENUM__{}", ordinal)));
            } else if let Some((field, _)) = pick(&self.fields, ordinal) {
                properties.remove(*field);
            }

            for (field, _) in ID_FIELDS {
                if let Some(Value::String(id)) = properties.get_mut(field) {
                    id.push_str("-bad");
                }
            }
        }

        feature
    }
}

/// Round-robin choice
fn pick<T>(items: &[T], ordinal: usize) -> Option<&T> {
    (!items.is_empty()).then(|| &items[ordinal % items.len()])
}

fn required_names(fields: &Value) -> impl Iterator<Item = &str> {
    fields
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

fn first_geometry_type(node: &Value) -> Option<GeometryKind> {
    node.pointer("/properties/type/enum/0")
        .and_then(Value::as_str)
        .and_then(GeometryKind::from_name)
}

fn feature_collection(features: Vec<Value>) -> Value {
    json!({"type": "FeatureCollection", "features": features})
}
