//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body: `{"error": "<human-readable message>"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "username must be unique")]
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_error_key() {
        let body = serde_json::to_value(ErrorResponse::new("invalid token")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "invalid token" }));
    }
}
