//! `/v2/store` endpoint wrappers

use std::fmt::Display;

use serde_json::Value;

use petcheck_core::ApiResponse;

use crate::client::{ApiClient, ClientError, json_content_type};

/// GET /v2/store/inventory
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn get_inventory(client: &ApiClient) -> Result<ApiResponse, ClientError> {
    client.get("/v2/store/inventory")
}

/// POST /v2/store/order
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn add_order(client: &ApiClient, payload: &Value) -> Result<ApiResponse, ClientError> {
    client.post("/v2/store/order", Some(payload), &json_content_type())
}

/// GET /v2/store/order/{orderId}
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn get_order(client: &ApiClient, order_id: impl Display) -> Result<ApiResponse, ClientError> {
    client.get(&format!("/v2/store/order/{order_id}"))
}

/// DELETE /v2/store/order/{orderId}
///
/// # Errors
///
/// Returns error if the request cannot be sent.
pub fn delete_order(
    client: &ApiClient,
    order_id: impl Display,
) -> Result<ApiResponse, ClientError> {
    client.delete(&format!("/v2/store/order/{order_id}"))
}
