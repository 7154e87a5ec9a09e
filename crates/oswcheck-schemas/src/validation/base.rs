//! The validator capability and its Draft 7 implementation
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::validation::error::{Keyword, RawError};
use crate::validation::path::{resolve, typed_segments, PathSegment};
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use std::sync::Arc;

/// Anything that can produce raw validation errors for a document
///
/// Implementations may be lazy; consumers drain the iterator themselves.
pub trait ErrorSource {
    /// Produce every schema violation of `document`
    fn iter_errors<'a>(&'a self, document: &'a Value) -> Box<dyn Iterator<Item = RawError> + 'a>;
}

impl<T: ErrorSource + ?Sized> ErrorSource for &T {
    fn iter_errors<'a>(&'a self, document: &'a Value) -> Box<dyn Iterator<Item = RawError> + 'a> {
        (**self).iter_errors(document)
    }
}

/// JSON Schema Draft 7 validator backed by the `jsonschema` crate
pub struct Draft7Validator {
    schema: Arc<Value>,
    validator: jsonschema::Validator,
}

impl Draft7Validator {
    /// Compile a schema in Draft 7 mode
    pub fn new(schema: Arc<Value>) -> LoaderResult<Self> {
        let validator = jsonschema::draft7::new(&schema)
            .map_err(|e| LoaderError::schema_compile(e.to_string()))?;
        Ok(Self { schema, validator })
    }

    /// The schema this validator was compiled from
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    fn convert(&self, err: jsonschema::ValidationError<'_>, document: &Value) -> RawError {
        let instance_pointer = err.instance_path.to_string();
        let schema_pointer = err.schema_path.to_string();
        let schema_path = typed_segments(&schema_pointer, &self.schema);

        let keyword = keyword_of(&err.kind, &schema_path);
        let keyword_value = match &err.kind {
            ValidationErrorKind::Enum { options } => Some(options.clone()),
            ValidationErrorKind::Constant { expected_value } => Some(expected_value.clone()),
            _ => resolve(&self.schema, &schema_path).cloned(),
        };

        RawError {
            instance_path: typed_segments(&instance_pointer, document),
            schema_path,
            keyword,
            instance_value: err.instance.as_ref().clone(),
            keyword_value,
            message: err.to_string(),
        }
    }
}

impl ErrorSource for Draft7Validator {
    fn iter_errors<'a>(&'a self, document: &'a Value) -> Box<dyn Iterator<Item = RawError> + 'a> {
        Box::new(
            self.validator
                .iter_errors(document)
                .map(move |err| self.convert(err, document)),
        )
    }
}

impl std::fmt::Debug for Draft7Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draft7Validator")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Keywords whose members are named by the schema author, not by Draft 7
const NAMED_MEMBER_KEYWORDS: &[&str] = &["properties", "patternProperties", "definitions", "dependencies"];

/// Keyword for a `jsonschema` error kind
///
/// Kinds without a dedicated variant are named after the last key of their
/// schema path when that key is in keyword position.
fn keyword_of(kind: &ValidationErrorKind, schema_path: &[PathSegment]) -> Keyword {
    match kind {
        // A `false` subschema ends its path on a property name
        ValidationErrorKind::FalseSchema => Keyword::Other("false".to_string()),
        ValidationErrorKind::Enum { .. } => Keyword::Enum,
        ValidationErrorKind::Type { .. } => Keyword::Type,
        ValidationErrorKind::Required { .. } => Keyword::Required,
        ValidationErrorKind::Constant { .. } => Keyword::Const,
        ValidationErrorKind::Pattern { .. } => Keyword::Pattern,
        ValidationErrorKind::Minimum { .. } => Keyword::Minimum,
        ValidationErrorKind::Maximum { .. } => Keyword::Maximum,
        ValidationErrorKind::AnyOf { .. } => Keyword::AnyOf,
        ValidationErrorKind::OneOfNotValid { .. } | ValidationErrorKind::OneOfMultipleValid { .. } => {
            Keyword::Other("oneOf".to_string())
        }
        _ => trailing_keyword(schema_path)
            .map(Keyword::from_name)
            .unwrap_or_else(|| Keyword::Other("unknown".to_string())),
    }
}

/// The final schema path key, if it names a keyword rather than a member
///
/// Keys below `properties` and friends are author-chosen names, so a property
/// called `enum` does not count as the `enum` keyword.
fn trailing_keyword(schema_path: &[PathSegment]) -> Option<&str> {
    let mut keyword_position = true;
    let mut trailing = None;

    for segment in schema_path {
        trailing = None;
        if let PathSegment::Key(key) = segment {
            if keyword_position {
                trailing = Some(key.as_str());
                keyword_position = !NAMED_MEMBER_KEYWORDS.contains(&key.as_str());
            } else {
                keyword_position = true;
            }
        }
    }

    trailing
}
