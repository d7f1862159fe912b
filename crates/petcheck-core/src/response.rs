//! Transport-agnostic response surface consumed by the validator
//!
//! The HTTP client crate converts its transport responses into this type;
//! core never talks to the network itself.

use indexmap::IndexMap;
use serde_json::Value;

/// A received HTTP response: status, raw body text, and ordered headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    pub headers: IndexMap<String, String>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>, headers: IndexMap<String, String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers,
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decode error for non-JSON content; the validator treats
    /// that case as an empty body section rather than a failure.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Exact-name header lookup. Case-insensitivity is not assumed; the
    /// schema database is authored against the names the server sends.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
