//! Per-suite request log files
//!
//! Each suite gets its own `<log_dir>/<suite>.log`; the destination travels
//! with the logger handle instead of process-global state. Every entry
//! records the request, a reconstructed curl command for replay, timing, and
//! the response body with newlines stripped.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::Value;

/// Appends request/response entries to one suite's log file.
#[derive(Debug, Clone)]
pub struct RequestLogger {
    log_file: PathBuf,
}

/// One request/response pair to be logged.
#[derive(Debug)]
pub struct LogEntry<'a> {
    pub endpoint: &'a str,
    pub url: &'a str,
    pub method: &'a str,
    pub payload: Option<&'a Value>,
    pub headers: &'a [(String, String)],
    pub response_body: &'a str,
    pub duration_ms: u128,
}

impl RequestLogger {
    /// Create a logger writing to `<log_dir>/<suite_name>.log`, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the log directory cannot be created.
    pub fn new(log_dir: impl AsRef<Path>, suite_name: &str) -> Result<Self, std::io::Error> {
        let log_dir = log_dir.as_ref();
        std::fs::create_dir_all(log_dir)?;
        Ok(Self {
            log_file: log_dir.join(format!("{suite_name}.log")),
        })
    }

    /// Append one entry.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be opened or written.
    pub fn log(&self, entry: &LogEntry) -> Result<(), std::io::Error> {
        let payload_json = entry
            .payload
            .map(ToString::to_string)
            .unwrap_or_else(|| "null".to_string());
        let headers_json = headers_json(entry.headers);
        let curl = build_curl(entry.url, entry.payload, entry.method, entry.headers);
        // Response bodies can be multi-line HTML error pages; collapse them
        // so one entry stays one block.
        let response: String = entry.response_body.lines().collect();

        let block = format!(
            "{{\n\
             \tendpoint: {}\n\
             \turl: {}\n\
             \ttime: {}\n\
             \tCURL: {curl}\n\
             \tduration: {} ms\n\
             \tpayload: {payload_json}\n\
             \theaders: {headers_json}\n\
             \tresponse: {response}\n\
             }}\n",
            entry.endpoint,
            entry.url,
            timestamp_iso(),
            entry.duration_ms,
        );

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(block.as_bytes())
    }

    /// Path of the log file this logger appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.log_file
    }
}

/// Delete all `.log` files in a log directory, creating the directory if it
/// does not exist yet. Suites call this once at setup.
///
/// # Errors
///
/// Returns error if the directory cannot be created, listed, or a file
/// cannot be removed.
pub fn clear_log_files(log_dir: impl AsRef<Path>) -> Result<(), std::io::Error> {
    let log_dir = log_dir.as_ref();
    if !log_dir.exists() {
        return std::fs::create_dir_all(log_dir);
    }
    for dir_entry in std::fs::read_dir(log_dir)? {
        let path = dir_entry?.path();
        if path.extension().is_some_and(|ext| ext == "log") && path.is_file() {
            std::fs::remove_file(path)?;
        }
    }
    Ok(())
}

/// Rebuild the request as a curl command for manual replay.
#[must_use]
pub fn build_curl(
    url: &str,
    payload: Option<&Value>,
    method: &str,
    headers: &[(String, String)],
) -> String {
    let mut command = format!("curl -svX {} {url}", method.to_uppercase());
    for (name, value) in headers {
        command.push_str(&format!(" -H '{name}: {value}'"));
    }
    if let Some(payload) = payload {
        command.push_str(&format!(" -d '{payload}'"));
    }
    command
}

fn headers_json(headers: &[(String, String)]) -> String {
    let map: serde_json::Map<String, Value> = headers
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(map).to_string()
}

/// `"2026-08-30T12:00:00Z"` — ISO 8601 from epoch, no date crate needed.
fn timestamp_iso() -> String {
    let epoch_secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let days = (epoch_secs / 86400) as i64;
    let tod = epoch_secs % 86400;
    let (y, m, d) = civil_from_days(days);
    format!(
        "{y:04}-{m:02}-{d:02}T{:02}:{:02}:{:02}Z",
        tod / 3600,
        (tod % 3600) / 60,
        tod % 60
    )
}

/// Howard Hinnant's `civil_from_days` — epoch days → (year, month, day).
///
/// Reference: <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m, d)
}
