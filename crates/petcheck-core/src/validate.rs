//! Validation entry point — load schema, flatten response, compare, render.

use std::path::PathBuf;

use serde_json::Map;

use crate::compare::{Section, compare_section};
use crate::flatten::{flatten_body, flatten_headers};
use crate::report::{NO_MISMATCH, render};
use crate::response::ApiResponse;
use crate::schema::{SchemaDb, SchemaError};

/// Validates responses against the schema database file.
///
/// Holds only the database path; the file is re-read on every call, so edits
/// to the database take effect without restarting anything.
#[derive(Debug, Clone)]
pub struct Validator {
    db_path: PathBuf,
}

impl Validator {
    #[must_use]
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Validate one response's body and headers against the schema entry for
    /// `(resource, endpoint, method)`.
    ///
    /// With `response = None` every comparison is skipped and the sentinel is
    /// returned. `body_strict` / `headers_strict` independently enable
    /// undeclared-key detection per section.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the database cannot be loaded or the
    /// triple has no entry. A missing entry is never reported as a clean
    /// result.
    pub fn validate(
        &self,
        resource: &str,
        endpoint: &str,
        method: &str,
        response: Option<&ApiResponse>,
        body_strict: bool,
        headers_strict: bool,
    ) -> Result<String, SchemaError> {
        let db = SchemaDb::load(&self.db_path)?;
        validate_with_db(
            &db,
            resource,
            endpoint,
            method,
            response,
            body_strict,
            headers_strict,
        )
    }
}

/// Validation against an already-loaded database. Body mismatches precede
/// header mismatches in the rendered report.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownEntry`] when the triple is absent (only
/// when there is a response to validate; the no-op call skips the lookup).
pub fn validate_with_db(
    db: &SchemaDb,
    resource: &str,
    endpoint: &str,
    method: &str,
    response: Option<&ApiResponse>,
    body_strict: bool,
    headers_strict: bool,
) -> Result<String, SchemaError> {
    let Some(response) = response else {
        return Ok(NO_MISMATCH.to_string());
    };

    let entry = db.lookup(resource, endpoint, method)?;

    // Non-JSON bodies skip flattening: the body section is vacuously empty
    // so error-page responses can be validated header-only.
    let flat_body = match response.json() {
        Ok(value) => flatten_body(&value),
        Err(_) => Map::new(),
    };

    let mut mismatches = compare_section(Section::Body, &entry.body, &flat_body, body_strict);

    let flat_headers = flatten_headers(&response.headers);
    mismatches.extend(compare_section(
        Section::Headers,
        &entry.headers,
        &flat_headers,
        headers_strict,
    ));

    Ok(render(&mismatches))
}
