//! Result rendering — the sentinel string and the mismatch block
//!
//! Callers compare against [`NO_MISMATCH`] by equality, so the zero-mismatch
//! case must be that exact literal and nothing else. Both the schema
//! validator and the substring checks render through here.

/// Sentinel returned when validation found zero discrepancies.
pub const NO_MISMATCH: &str = "No mismatch values";

/// Render an accumulated mismatch list.
///
/// Zero mismatches render as the sentinel. Otherwise: a leading newline, one
/// mismatch per line, an empty line, and `There are N mismatches!` where N
/// counts every entry (strict-mode blocks count once each).
#[must_use]
pub fn render<T: std::fmt::Display>(mismatches: &[T]) -> String {
    if mismatches.is_empty() {
        return NO_MISMATCH.to_string();
    }

    let mut out = String::from("\n");
    for mismatch in mismatches {
        out.push_str(&mismatch.to_string());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("There are {} mismatches!\n", mismatches.len()));
    out
}
