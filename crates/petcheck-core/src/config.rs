//! Project configuration for the test harness

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Pet Store deployment under test
    pub base_url: String,

    /// Path to the schema database file
    #[serde(default = "default_schema_db")]
    pub schema_db: PathBuf,

    /// Directory for per-suite request logs
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Headers sent with every request (API keys, auth)
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_schema_db() -> PathBuf {
    PathBuf::from("schema_db.json")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://petstore.swagger.io".to_string(),
            schema_db: default_schema_db(),
            log_dir: default_log_dir(),
            headers: HashMap::new(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load from default location (.petcheck.toml)
    pub fn load_default() -> Result<Self, ConfigError> {
        let candidates = [".petcheck.toml", ".petcheck.json", "petcheck.toml"];

        for name in candidates {
            let path = Path::new(name);
            if path.exists() {
                return Self::load(path);
            }
        }

        // No config file, return default
        Ok(Self::default())
    }

    /// Create example config file
    pub fn example() -> &'static str {
        r#"# petcheck configuration

# Pet Store deployment under test
base_url = "https://petstore.swagger.io"

# Hand-maintained expected-type database
schema_db = "schema_db.json"

# Per-suite request logs land here
log_dir = "logs"

# Headers sent with every request (auth, api keys)
[headers]
# api_key = "special-key"

# Request timeout in seconds (default: 30)
# timeout_secs = 30
"#
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
}
