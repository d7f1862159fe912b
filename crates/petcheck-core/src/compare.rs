//! Schema comparator — diffs a flattened response section against the
//! expected-type mapping from the schema database.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::types::JsonType;

/// Which part of the response a mismatch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Body,
    Headers,
}

impl Section {
    /// Marker used in single-line mismatch messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body => "BODY",
            Self::Headers => "HEADERS",
        }
    }

    /// Location name used in strict-mode MISSING blocks.
    #[must_use]
    pub const fn location(self) -> &'static str {
        match self {
            Self::Body => "payload",
            Self::Headers => "headers",
        }
    }
}

/// A single discrepancy between the schema database and an observed response.
///
/// Mismatches are accumulated data, never errors; rendering happens in
/// [`crate::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Expected path present but with a different runtime type.
    TypeMismatch {
        section: Section,
        path: String,
        expected: JsonType,
        actual: JsonType,
    },
    /// Expected path absent from the flattened response.
    MissingKey { section: Section, path: String },
    /// Strict mode only: observed path not declared in the schema database.
    UndeclaredKey { section: Section, path: String },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                section,
                path,
                expected,
                actual,
            } => write!(
                f,
                "({}) Element > {path} < expected to be > {expected} < but actually > {actual} <",
                section.label()
            ),
            Self::MissingKey { section, path } => write!(
                f,
                "({}) Element > {path} < missing from schema",
                section.label()
            ),
            Self::UndeclaredKey { section, path } => write!(
                f,
                "Key      : {path}\n\
                 Test     : MISSING\n\
                 Expected : Element present\n\
                 Actual   : Element in {} but not in schema DB",
                section.location()
            ),
        }
    }
}

/// Compare one flattened section against its expected-type mapping.
///
/// Mismatches from the expected→actual pass come first, in the iteration
/// order of `expected` (schema authoring order). When `strict` is set,
/// undeclared-key blocks follow in the iteration order of `actual`.
#[must_use]
pub fn compare_section(
    section: Section,
    expected: &IndexMap<String, JsonType>,
    actual: &Map<String, Value>,
    strict: bool,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for (path, &expected_type) in expected {
        match actual.get(path) {
            None => mismatches.push(Mismatch::MissingKey {
                section,
                path: path.clone(),
            }),
            Some(value) => {
                let actual_type = JsonType::of(value);
                if actual_type != expected_type {
                    mismatches.push(Mismatch::TypeMismatch {
                        section,
                        path: path.clone(),
                        expected: expected_type,
                        actual: actual_type,
                    });
                }
            }
        }
    }

    if strict {
        for path in actual.keys() {
            if !expected.contains_key(path) {
                mismatches.push(Mismatch::UndeclaredKey {
                    section,
                    path: path.clone(),
                });
            }
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expected(entries: &[(&str, JsonType)]) -> IndexMap<String, JsonType> {
        entries
            .iter()
            .map(|(path, t)| (path.to_string(), *t))
            .collect()
    }

    #[test]
    fn matching_section_yields_no_mismatches() {
        let exp = expected(&[("a.b", JsonType::Int), ("c.0", JsonType::Str)]);
        let actual = crate::flatten(&json!({"a": {"b": 5}, "c": ["x"]}));
        assert!(compare_section(Section::Body, &exp, &actual, false).is_empty());
    }

    #[test]
    fn missing_key_message() {
        let exp = expected(&[("a", JsonType::Int)]);
        let actual = Map::new();
        let mismatches = compare_section(Section::Body, &exp, &actual, false);
        assert_eq!(mismatches.len(), 1);
        insta::assert_snapshot!(
            mismatches[0],
            @"(BODY) Element > a < missing from schema"
        );
    }

    #[test]
    fn type_mismatch_message() {
        let exp = expected(&[("a", JsonType::Int)]);
        let actual = crate::flatten(&json!({"a": "five"}));
        let mismatches = compare_section(Section::Body, &exp, &actual, false);
        assert_eq!(mismatches.len(), 1);
        insta::assert_snapshot!(
            mismatches[0],
            @"(BODY) Element > a < expected to be > int < but actually > str <"
        );
    }

    #[test]
    fn headers_section_uses_headers_label() {
        let exp = expected(&[("Content-Type", JsonType::Str)]);
        let actual = Map::new();
        let mismatches = compare_section(Section::Headers, &exp, &actual, false);
        assert_eq!(
            mismatches[0].to_string(),
            "(HEADERS) Element > Content-Type < missing from schema"
        );
    }

    #[test]
    fn strict_flags_undeclared_keys() {
        let exp = expected(&[("a", JsonType::Int)]);
        let actual = crate::flatten(&json!({"a": 1, "b": 2}));
        let mismatches = compare_section(Section::Body, &exp, &actual, true);
        assert_eq!(mismatches.len(), 1);
        let rendered = mismatches[0].to_string();
        assert!(rendered.contains("Key      : b"));
        assert!(rendered.contains("Test     : MISSING"));
        assert!(rendered.contains("Expected : Element present"));
        assert!(rendered.contains("Actual   : Element in payload but not in schema DB"));
    }

    #[test]
    fn strict_block_names_headers_location() {
        let exp = expected(&[]);
        let actual = crate::flatten(&json!({"X-Extra": "1"}));
        let mismatches = compare_section(Section::Headers, &exp, &actual, true);
        assert!(
            mismatches[0]
                .to_string()
                .contains("Element in headers but not in schema DB")
        );
    }

    #[test]
    fn non_strict_ignores_undeclared_keys() {
        let exp = expected(&[("a", JsonType::Int)]);
        let actual = crate::flatten(&json!({"a": 1, "b": 2, "c": 3}));
        assert!(compare_section(Section::Body, &exp, &actual, false).is_empty());
    }

    #[test]
    fn ordering_expected_pass_then_strict_extras() {
        let exp = expected(&[("first", JsonType::Int), ("second", JsonType::Str)]);
        let actual = crate::flatten(&json!({"second": 9, "zzz": 1}));
        let mismatches = compare_section(Section::Body, &exp, &actual, true);
        assert!(matches!(&mismatches[0], Mismatch::MissingKey { path, .. } if path == "first"));
        assert!(matches!(&mismatches[1], Mismatch::TypeMismatch { path, .. } if path == "second"));
        assert!(matches!(&mismatches[2], Mismatch::UndeclaredKey { path, .. } if path == "zzz"));
    }

    #[test]
    fn null_value_against_null_tag_matches() {
        let exp = expected(&[("a", JsonType::Null)]);
        let actual = crate::flatten(&json!({"a": null}));
        assert!(compare_section(Section::Body, &exp, &actual, false).is_empty());
    }
}
