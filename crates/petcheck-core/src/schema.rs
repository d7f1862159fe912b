//! Schema database — hand-maintained expected shapes per endpoint
//!
//! The on-disk document is a three-level JSON mapping:
//!
//! ```text
//! schema[resource][endpoint][method] = {
//!     "body":    { "category.id": "int", "tags.0.name": "str", ... },
//!     "headers": { "Content-Type": "str", ... }
//! }
//! ```
//!
//! Paths use the same dotted/index notation the flattener produces. Maps are
//! order-preserving so mismatch reports follow authoring order.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::JsonType;

/// Expected body and header shapes for one `(resource, endpoint, method)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EndpointSchema {
    /// Flattened body path → expected type tag
    #[serde(default)]
    pub body: IndexMap<String, JsonType>,
    /// Header name → expected type tag (header values are always `str`)
    #[serde(default)]
    pub headers: IndexMap<String, JsonType>,
}

/// The full schema database document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SchemaDb {
    resources: IndexMap<String, IndexMap<String, IndexMap<String, EndpointSchema>>>,
}

impl SchemaDb {
    /// Load the database from a JSON file. Called fresh on every validation;
    /// the document is read-only per call, so no caching is needed.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] if the file cannot be read and
    /// [`SchemaError::Parse`] on malformed JSON or unknown type tags.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::Io(path.to_path_buf(), e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SchemaError::Parse(e.to_string()))
    }

    /// Look up the entry for one endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownEntry`] when the triple is not in the
    /// database. A typo'd key must surface as an error, never as a clean
    /// validation result.
    pub fn lookup(
        &self,
        resource: &str,
        endpoint: &str,
        method: &str,
    ) -> Result<&EndpointSchema, SchemaError> {
        self.resources
            .get(resource)
            .and_then(|endpoints| endpoints.get(endpoint))
            .and_then(|methods| methods.get(method))
            .ok_or_else(|| SchemaError::UnknownEntry {
                resource: resource.to_string(),
                endpoint: endpoint.to_string(),
                method: method.to_string(),
            })
    }

    /// Insert or replace an entry. Used by tests and tooling that build
    /// databases programmatically.
    pub fn insert(
        &mut self,
        resource: impl Into<String>,
        endpoint: impl Into<String>,
        method: impl Into<String>,
        entry: EndpointSchema,
    ) {
        self.resources
            .entry(resource.into())
            .or_default()
            .entry(endpoint.into())
            .or_default()
            .insert(method.into(), entry);
    }

    /// Iterate all `(resource, endpoint, method)` triples in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str, &EndpointSchema)> {
        self.resources.iter().flat_map(|(resource, endpoints)| {
            endpoints.iter().flat_map(move |(endpoint, methods)| {
                methods.iter().map(move |(method, entry)| {
                    (resource.as_str(), endpoint.as_str(), method.as_str(), entry)
                })
            })
        })
    }
}

/// Generate the JSON Schema describing the database document format, for
/// editor tooling and the `petcheck schema` command.
#[must_use]
pub fn generate_db_schema() -> String {
    let schema = schemars::schema_for!(SchemaDb);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Invalid schema database: {0}")]
    Parse(String),
    #[error("No schema entry for {method} {endpoint} (resource '{resource}')")]
    UnknownEntry {
        resource: String,
        endpoint: String,
        method: String,
    },
}
