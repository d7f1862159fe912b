//! `/v2/pet` endpoint wrappers

use std::fmt::Display;

use serde_json::Value;

use petcheck_core::ApiResponse;

use crate::client::{ApiClient, ClientError, json_content_type};

/// POST /v2/pet
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn add_pet(client: &ApiClient, payload: &Value) -> Result<ApiResponse, ClientError> {
    client.post("/v2/pet", Some(payload), &json_content_type())
}

/// PUT /v2/pet
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn update_pet(client: &ApiClient, payload: &Value) -> Result<ApiResponse, ClientError> {
    client.put("/v2/pet", Some(payload), &json_content_type())
}

/// POST /v2/pet/{petId} — form-encoded update of name and status.
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn update_pet_with_form(
    client: &ApiClient,
    pet_id: impl Display,
    name: &str,
    status: &str,
) -> Result<ApiResponse, ClientError> {
    client.post_form(
        &format!("/v2/pet/{pet_id}"),
        &[
            ("name".to_string(), name.to_string()),
            ("status".to_string(), status.to_string()),
        ],
    )
}

/// GET /v2/pet/{petId}
///
/// The id is any displayable value so suites can probe non-numeric ids.
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn get_pet(client: &ApiClient, pet_id: impl Display) -> Result<ApiResponse, ClientError> {
    client.get(&format!("/v2/pet/{pet_id}"))
}

/// GET /v2/pet/findByStatus
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn find_pets_by_status(
    client: &ApiClient,
    status: &str,
) -> Result<ApiResponse, ClientError> {
    client.get_with_query("/v2/pet/findByStatus", &[("status", status)])
}

/// DELETE /v2/pet/{petId}
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn delete_pet(client: &ApiClient, pet_id: impl Display) -> Result<ApiResponse, ClientError> {
    client.delete(&format!("/v2/pet/{pet_id}"))
}
