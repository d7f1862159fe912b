//! Dotted-path flattener for JSON bodies and response headers
//!
//! Converts a nested value into a single-level mapping from delimiter-joined
//! path strings to scalar leaves: `{"category": {"id": 5}}` becomes
//! `{"category.id": 5}` and array elements are addressed by index
//! (`"tags.0.name"`). Every scalar leaf appears exactly once; empty objects
//! and arrays contribute nothing.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Path segment delimiter, shared with schema authoring.
pub const DELIMITER: char = '.';

/// Flatten an arbitrary nested value.
///
/// A bare scalar at the root flattens to a single entry keyed by the empty
/// path `""`.
#[must_use]
pub fn flatten(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    walk(value, String::new(), &mut out);
    out
}

/// Flatten a top-level response body.
///
/// Policy for array roots: flatten the element at index 0 only; an empty
/// array yields an empty mapping. List endpoints are validated against the
/// shape of their first element.
#[must_use]
pub fn flatten_body(value: &Value) -> Map<String, Value> {
    match value {
        Value::Array(items) => items.first().map(flatten).unwrap_or_default(),
        other => flatten(other),
    }
}

/// Flatten response headers. Headers are already a flat string→string
/// mapping, so every entry lands under its own name with runtime type `str`.
#[must_use]
pub fn flatten_headers(headers: &IndexMap<String, String>) -> Map<String, Value> {
    headers
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect()
}

fn walk(value: &Value, path: String, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                walk(child, join(&path, key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, join(&path, &index.to_string()), out);
            }
        }
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{DELIMITER}{segment}")
    }
}
