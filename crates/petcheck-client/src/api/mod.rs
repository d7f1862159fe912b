//! Thin endpoint wrappers over [`crate::ApiClient`]
//!
//! Wrappers take raw JSON payloads so negative tests can drop or corrupt
//! individual fields before sending.

pub mod pet;
pub mod store;
pub mod user;
