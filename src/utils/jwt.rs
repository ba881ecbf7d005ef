use jiff::Timestamp;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const SECONDS_PER_HOUR: i64 = 3600;

/// JWT claims carried by every bearer token: the user's id and username plus
/// the issue/expiry timestamps.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user with the given validity lifetime in hours.
    pub fn new(user_id: i32, username: String, expiration_hours: i64) -> Self {
        let now = Timestamp::now().as_second();
        Self {
            sub: user_id.to_string(),
            username,
            iat: now,
            exp: now + expiration_hours * SECONDS_PER_HOUR,
        }
    }

    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("invalid token"))
    }
}

/// Signs a token for the given user.
pub fn issue_token(
    user_id: i32,
    username: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, username, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("failed to sign token: {e}"),
    })
}

/// Verifies a token and returns its claims.
///
/// Any failure (malformed token, bad signature, expired) collapses into the
/// same authentication error so callers cannot distinguish why a credential
/// was rejected.
pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("invalid token"))
}
