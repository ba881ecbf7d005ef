//! Authentication-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username
    #[schema(example = "mluukkai")]
    pub username: String,
    /// Password (plain text)
    #[schema(example = "salainen", format = "password")]
    pub password: String,
}

/// Login response with the bearer token and public profile fields
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: String,
    /// Username
    #[schema(example = "mluukkai")]
    pub username: String,
    /// Display name
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_has_expected_shape() {
        let response = LoginResponse {
            token: "abc.def.ghi".to_string(),
            username: "alice".to_string(),
            name: None,
        };
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["token"], "abc.def.ghi");
        assert_eq!(body["username"], "alice");
        assert!(body["name"].is_null());
    }
}
