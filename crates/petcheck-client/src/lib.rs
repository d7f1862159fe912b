//! petcheck-client: HTTP collaborator for the Pet Store test harness
//!
//! Blocking request wrappers around `reqwest`, a per-suite request log with
//! curl reconstruction, random fixture generators, and thin typed wrappers
//! over the pet / store / user endpoints. Validation of what comes back
//! lives in `petcheck-core`.

pub mod api;
pub mod client;
pub mod fixtures;
pub mod logger;

pub use client::{ApiClient, ClientError, json_content_type};
pub use fixtures::{Category, Order, Pet, Tag, User};
pub use logger::{RequestLogger, clear_log_files};
