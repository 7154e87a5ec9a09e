//! Turn a selected raw error into a clean single-line message
//!
//! Most keywords keep the validator's own wording. Two are rewritten because
//! their raw messages are noisy: `enum` lists every candidate and `anyOf`
//! reports the failure of the combinator rather than what is missing.
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{Keyword, RawError};
use crate::validation::path::{resolve, PathSegment};
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Enum candidates shown before the list is cut off
pub const ENUM_CANDIDATES_SHOWN: usize = 2;

const COMBINATORS: [&str; 3] = ["allOf", "anyOf", "oneOf"];

static OTHER_CANDIDATES_REGEX: OnceLock<Regex> = OnceLock::new();

fn other_candidates_regex() -> &'static Regex {
    OTHER_CANDIDATES_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\s*or\s+\d+\s+other\s+candidates?").expect("static regex is valid")
    })
}

/// Render an error for the report
pub fn render(err: &RawError, schema: &Value) -> String {
    match &err.keyword {
        Keyword::Enum => render_enum(err),
        Keyword::AnyOf => render_any_of(err, schema),
        _ => first_line(&err.message).to_string(),
    }
}

/// Text up to the first line break
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

fn render_enum(err: &RawError) -> String {
    let candidates = err
        .keyword_value
        .as_ref()
        .and_then(Value::as_array)
        .filter(|options| !options.is_empty());

    match candidates {
        Some(options) => {
            let shown = options
                .iter()
                .take(ENUM_CANDIDATES_SHOWN)
                .map(compact_json)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} is not one of {}", compact_json(&err.instance_value), shown)
        }
        None => strip_other_candidates(&err.message),
    }
}

/// Drop the trailing "or N other candidates" clause and keep the first line
pub fn strip_other_candidates(message: &str) -> String {
    let cleaned = other_candidates_regex().replace_all(message, "");
    first_line(&cleaned).to_string()
}

fn render_any_of(err: &RawError, schema: &Value) -> String {
    match any_of_required_fields(schema, &err.schema_path) {
        Some(fields) => format!(
            "must include one of: {}",
            fields.into_iter().collect::<Vec<_>>().join(", ")
        ),
        None => first_line(&err.message).to_string(),
    }
}

/// Collect the `required` fields of every branch of the `anyOf` at `schema_path`
///
/// Nested `allOf`/`anyOf`/`oneOf` arrays inside the branches are searched too.
/// Returns `None` when the path does not lead to an array or when no branch
/// requires anything.
pub fn any_of_required_fields(schema: &Value, schema_path: &[PathSegment]) -> Option<BTreeSet<String>> {
    let branches = resolve(schema, schema_path)?.as_array()?;

    let mut required = BTreeSet::new();
    let mut stack: Vec<&Value> = branches.iter().collect();

    while let Some(node) = stack.pop() {
        let Some(object) = node.as_object() else {
            continue;
        };

        if let Some(fields) = object.get("required").and_then(Value::as_array) {
            required.extend(fields.iter().filter_map(Value::as_str).map(str::to_string));
        }

        for combinator in COMBINATORS {
            if let Some(nested) = object.get(combinator).and_then(Value::as_array) {
                stack.extend(nested.iter());
            }
        }
    }

    if required.is_empty() {
        None
    } else {
        Some(required)
    }
}

fn compact_json(value: &Value) -> String {
    // Display on Value is the compact serde_json encoding
    value.to_string()
}
