//! petcheck-core: Schema validation engine for black-box Pet Store API testing
//!
//! This crate provides the validation side of the test harness: a dotted-path
//! flattener for JSON response bodies and headers, a hand-maintained schema
//! database of expected types per `(resource, endpoint, method)`, and the
//! comparator that diffs observed runtime types against that database.

pub mod checks;
pub mod compare;
pub mod config;
pub mod flatten;
pub mod report;
pub mod response;
pub mod schema;
pub mod types;
pub mod validate;

pub use checks::{ResponseExpectations, check_response};
pub use compare::{Mismatch, Section, compare_section};
pub use config::{Config, ConfigError};
pub use flatten::{flatten, flatten_body, flatten_headers};
pub use report::{NO_MISMATCH, render};
pub use response::ApiResponse;
pub use schema::{EndpointSchema, SchemaDb, SchemaError, generate_db_schema};
pub use types::JsonType;
pub use validate::{Validator, validate_with_db};
