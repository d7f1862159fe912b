//! Substring and status-code response checks
//!
//! The coarse counterpart to the schema validator: assert that a response
//! carries the expected status and that given fragments do (or do not)
//! appear in the body text or in the headers. Failures accumulate and render
//! through the shared report machinery, so a clean run is the same
//! `No mismatch values` sentinel the validator returns.

use crate::report::render;
use crate::response::ApiResponse;

/// What a test expects from one response. Unset fields are not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseExpectations<'a> {
    /// Expected HTTP status code
    pub status: Option<u16>,
    /// Fragments that must appear in the body text
    pub body_contains: &'a [&'a str],
    /// Fragments that must not appear in the body text
    pub body_lacks: &'a [&'a str],
    /// Fragments that must appear in the pretty-printed header dump
    pub header_contains: &'a [&'a str],
    /// Fragments that must not appear in the pretty-printed header dump
    pub header_lacks: &'a [&'a str],
}

/// Run all configured checks and render the result.
#[must_use]
pub fn check_response(response: &ApiResponse, expectations: &ResponseExpectations) -> String {
    let mut failures: Vec<String> = Vec::new();

    if let Some(expected) = expectations.status {
        if expected != response.status {
            failures.push(format!(
                "Expected status {expected} does not match actual status {}",
                response.status
            ));
        }
    }

    check_contains(expectations.body_contains, &response.body, &mut failures);
    check_lacks(expectations.body_lacks, &response.body, &mut failures);

    if !expectations.header_contains.is_empty() || !expectations.header_lacks.is_empty() {
        let header_dump = header_dump(response);
        check_contains(expectations.header_contains, &header_dump, &mut failures);
        check_lacks(expectations.header_lacks, &header_dump, &mut failures);
    }

    render(&failures)
}

/// Headers rendered as pretty-printed JSON, matching how tests quote them:
/// `"Content-Type": "application/json"`.
fn header_dump(response: &ApiResponse) -> String {
    serde_json::to_string_pretty(&response.headers).unwrap_or_default()
}

fn check_contains(fragments: &[&str], haystack: &str, failures: &mut Vec<String>) {
    for fragment in fragments {
        if !haystack.contains(fragment) {
            failures.push(format!(
                "Expected string \"{fragment}\" does NOT appear in results content"
            ));
        }
    }
}

fn check_lacks(fragments: &[&str], haystack: &str, failures: &mut Vec<String>) {
    for fragment in fragments {
        if haystack.contains(fragment) {
            failures.push(format!(
                "Unexpected string \"{fragment}\" DOES appear in results content"
            ));
        }
    }
}
