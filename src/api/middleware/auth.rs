//! Bearer token authentication middleware.
//!
//! Validates the token from the Authorization header and stores the
//! authenticated identity in request extensions.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::services::Identity;
use crate::state::AppState;
use crate::utils::jwt::verify_token;

/// Extension type for the authenticated user.
///
/// Added to request extensions after successful authentication and
/// extracted in handlers with `Extension<AuthUser>`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User id from the token subject
    pub user_id: i32,
    /// Username from the token claims
    pub username: String,
}

impl AuthUser {
    /// Returns the identity used by ownership checks.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            username: self.username.clone(),
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively and surrounding whitespace on
/// the token is ignored.
fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Token authentication middleware for protected routes.
///
/// # Errors
/// Returns 401 Unauthorized when the Authorization header is missing or
/// malformed, or when token verification fails.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or_else(|| AppError::unauthorized("invalid token"))?;

    let claims = verify_token(token, &state.jwt_config.secret)?;
    let auth_user = AuthUser {
        user_id: claims.user_id()?,
        username: claims.username,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
