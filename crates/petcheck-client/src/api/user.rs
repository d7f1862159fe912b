//! `/v2/user` endpoint wrappers

use serde_json::Value;

use petcheck_core::ApiResponse;

use crate::client::{ApiClient, ClientError, json_content_type};

/// POST /v2/user
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn create_user(client: &ApiClient, payload: &Value) -> Result<ApiResponse, ClientError> {
    client.post("/v2/user", Some(payload), &json_content_type())
}

/// GET /v2/user/{username}
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn get_user(client: &ApiClient, username: &str) -> Result<ApiResponse, ClientError> {
    client.get(&format!("/v2/user/{username}"))
}

/// PUT /v2/user/{username}
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn update_user(
    client: &ApiClient,
    username: &str,
    payload: &Value,
) -> Result<ApiResponse, ClientError> {
    client.put(&format!("/v2/user/{username}"), Some(payload), &json_content_type())
}

/// DELETE /v2/user/{username}
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn delete_user(client: &ApiClient, username: &str) -> Result<ApiResponse, ClientError> {
    client.delete(&format!("/v2/user/{username}"))
}

/// GET /v2/user/login
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<ApiResponse, ClientError> {
    client.get_with_query(
        "/v2/user/login",
        &[("username", username), ("password", password)],
    )
}

/// GET /v2/user/logout
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn logout(client: &ApiClient) -> Result<ApiResponse, ClientError> {
    client.get("/v2/user/logout")
}
