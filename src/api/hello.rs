//! Health Probe
//!
//! `GET /api/hello`, used by the home page and the API test page.

use crate::error::ApiError;
use crate::models::HelloMessage;
use super::Gateway;

const HELLO_PATH: &str = "/api/hello";

pub async fn hello(gateway: &Gateway) -> Result<HelloMessage, ApiError> {
    gateway.get_json(HELLO_PATH, "Failed to reach API").await
}

/// Raw probe response, for display as-is
pub async fn probe(gateway: &Gateway) -> Result<serde_json::Value, ApiError> {
    gateway.get_json(HELLO_PATH, "Failed to reach API").await
}
