//! Typed JSON paths and best-effort traversal
//!
//! Validator errors carry their locations as RFC 6901 JSON pointers. A pointer
//! token alone cannot tell an array index from an object key named `"2"`, so
//! pointers are typed by walking the tree they point into.
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single step in an instance or schema path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object member name
    Key(String),
    /// Array position
    Index(usize),
}

impl PathSegment {
    /// Create a key segment
    pub fn key<K: Into<String>>(key: K) -> Self {
        Self::Key(key.into())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Build a path from mixed key/index literals
///
/// ```rust
/// use oswcheck_schemas::path;
/// use oswcheck_schemas::validation::PathSegment;
///
/// let p = path!["features", 2, "properties"];
/// assert_eq!(p[1], PathSegment::Index(2));
/// ```
#[macro_export]
macro_rules! path {
    () => { Vec::<$crate::validation::PathSegment>::new() };
    ($($segment:expr),+ $(,)?) => {
        vec![$($crate::validation::PathSegment::from($segment)),+]
    };
}

/// Split a JSON pointer into unescaped reference tokens
pub fn pointer_tokens(pointer: &str) -> Vec<String> {
    let pointer = pointer.strip_prefix('#').unwrap_or(pointer);
    if pointer.is_empty() {
        return Vec::new();
    }

    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// Convert a JSON pointer into typed segments by walking `root` alongside it
///
/// A token becomes an [`PathSegment::Index`] when it addresses an element of an
/// array. Once the walk leaves the tree, all-digit tokens are taken as indices.
pub fn typed_segments(pointer: &str, root: &Value) -> Vec<PathSegment> {
    let mut current = Some(root);
    let mut segments = Vec::new();

    for token in pointer_tokens(pointer) {
        let index = token.parse::<usize>().ok().filter(|_| is_decimal(&token));
        let segment = match (current, index) {
            (Some(Value::Array(_)), Some(index)) => PathSegment::Index(index),
            (None, Some(index)) => PathSegment::Index(index),
            _ => PathSegment::Key(token),
        };

        current = current.and_then(|node| advance(root, node, &segment));
        segments.push(segment);
    }

    segments
}

/// Descend into `root` along `path`, returning `None` on any shape mismatch
///
/// A `$ref` key whose current node carries a string reference jumps to the
/// referenced location in `root`. Only same-document fragments are followed.
pub fn resolve<'a>(root: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    let mut current = root;

    for segment in path {
        current = advance(root, current, segment)?;
    }

    Some(current)
}

/// Resolve a `$ref` string against the document root
pub fn resolve_reference<'a>(root: &'a Value, reference: &str) -> Option<&'a Value> {
    let fragment = match reference.find('#') {
        Some(position) => &reference[position + 1..],
        None if reference.starts_with('/') => reference,
        None => return None,
    };

    let mut current = root;
    for token in pointer_tokens(fragment) {
        current = match current {
            Value::Object(map) => map.get(&token)?,
            Value::Array(items) => items.get(token.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Render a path as a JSON pointer
pub fn to_pointer(path: &[PathSegment]) -> String {
    path.iter()
        .map(|segment| match segment {
            PathSegment::Key(key) => format!("/{}", key.replace('~', "~0").replace('/', "~1")),
            PathSegment::Index(index) => format!("/{}", index),
        })
        .collect()
}

fn advance<'a>(root: &'a Value, node: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (segment, node.get("$ref")) {
        (PathSegment::Key(key), Some(Value::String(reference))) if key == "$ref" => {
            resolve_reference(root, reference)
        }
        _ => step(node, segment),
    }
}

fn step<'a>(node: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (node, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map.get(key),
        (Value::Object(map), PathSegment::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
        _ => None,
    }
}

// "01" and "+1" parse as integers but are keys, not RFC 6901 array indices
fn is_decimal(token: &str) -> bool {
    !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pointer_tokens_unescape() {
        assert!(pointer_tokens("").is_empty());
        assert_eq!(pointer_tokens("/a~1b/c~0d"), vec!["a/b", "c~d"]);
        assert_eq!(pointer_tokens("#/definitions/X"), vec!["definitions", "X"]);
    }

    #[test]
    fn test_typed_segments_follow_document_shape() {
        let doc = json!({
            "features": [{"properties": {"2": "key named two"}}, {}, {}]
        });

        let segments = typed_segments("/features/0/properties/2", &doc);
        assert_eq!(segments, path!["features", 0, "properties", "2"]);
    }

    #[test]
    fn test_typed_segments_outside_tree() {
        let doc = json!({});
        let segments = typed_segments("/features/7/highway", &doc);
        assert_eq!(segments, path!["features", 7, "highway"]);
    }

    #[test]
    fn test_leading_zero_is_a_key() {
        let doc = json!({"items": [1, 2]});
        let segments = typed_segments("/items/01", &doc);
        assert_eq!(segments[1], PathSegment::key("01"));
    }

    #[test]
    fn test_resolve_mismatch_is_none() {
        let schema = json!({"anyOf": [{"required": ["a"]}]});
        assert!(resolve(&schema, &path!["anyOf", 3]).is_none());
        assert!(resolve(&schema, &path!["anyOf", 0, "required", "x"]).is_none());
        assert_eq!(resolve(&schema, &path!["anyOf", 0, "required", 0]), Some(&json!("a")));
    }

    #[test]
    fn test_resolve_follows_local_ref() {
        let schema = json!({
            "definitions": {"Fields": {"anyOf": [{"required": ["name"]}]}},
            "properties": {"properties": {"$ref": "https://example.com/schema#/definitions/Fields"}}
        });

        let node = resolve(&schema, &path!["properties", "properties", "$ref", "anyOf"]);
        assert_eq!(node, Some(&json!([{"required": ["name"]}])));
    }

    #[test]
    fn test_typed_segments_through_ref() {
        let schema = json!({
            "definitions": {"Branches": {"anyOf": [{"required": ["a"]}, {"required": ["b"]}]}},
            "items": {"$ref": "#/definitions/Branches"}
        });

        let segments = typed_segments("/items/$ref/anyOf/1/required", &schema);
        assert_eq!(segments, path!["items", "$ref", "anyOf", 1, "required"]);
        assert_eq!(resolve(&schema, &segments), Some(&json!(["b"])));
    }

    #[test]
    fn test_to_pointer() {
        assert_eq!(to_pointer(&path!["a/b", 0, "c"]), "/a~1b/0/c");
        assert_eq!(to_pointer(&[]), "");
    }
}
