//! User-related DTOs for API requests and responses.

use crate::models::{User, UserSummary};
use crate::services::RegisterInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for registering a new user.
///
/// Length rules are enforced by the user service so the response carries the
/// exact combined message for either short field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Username (unique, at least 3 characters)
    #[schema(example = "mluukkai", min_length = 3)]
    pub username: String,
    /// Optional display name
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
    /// Password (plain text, will be hashed; at least 3 characters)
    #[schema(example = "salainen", format = "password", min_length = 3)]
    pub password: String,
}

impl RegisterRequest {
    /// Converts the request DTO into service-level registration input.
    pub fn into_input(self) -> RegisterInput {
        RegisterInput {
            username: self.username,
            name: self.name,
            password: self.password,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data. Contains only public fields; the password
/// hash is not part of this type at all, so it cannot leak through
/// serialization.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}

impl From<UserSummary> for UserResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}
