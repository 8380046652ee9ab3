use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body returned for server-side failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field validation failures, one human-readable message per failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub messages: Vec<String>,
}

/// Payload served at the API root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub message: String,
    /// Path of the interactive API documentation.
    pub doc: String,
}

impl Default for HomeDto {
    fn default() -> Self {
        Self {
            message: "Welcome to the vehicle API - Minimal API".to_string(),
            doc: "/swagger".to_string(),
        }
    }
}
