//! User service for registration and credential checks.
//!
//! Password hashing happens here, before anything reaches the repository;
//! plaintext passwords never leave this module.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};

/// Minimum length for both username and password, in characters.
const MIN_CREDENTIAL_CHARS: usize = 3;

/// Input for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Registers a new user.
    ///
    /// # Errors
    /// `Validation` when username or password is shorter than three
    /// characters, or when the username is already taken (reported by the
    /// store's unique index).
    pub async fn register(&self, input: RegisterInput) -> AppResult<User> {
        Self::validate_registration(&input)?;

        let password_hash = hash_password(&input.password)?;
        self.repo
            .create(NewUser {
                username: input.username,
                name: input.name,
                password_hash,
            })
            .await
    }

    /// Checks a username/password pair and returns the matching user.
    ///
    /// An unknown username and a wrong password produce the identical error,
    /// so callers cannot probe which usernames exist.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("invalid username or password"))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("invalid username or password"));
        }
        Ok(user)
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_all().await
    }

    fn validate_registration(input: &RegisterInput) -> AppResult<()> {
        let username_ok = input.username.chars().count() >= MIN_CREDENTIAL_CHARS;
        let password_ok = input.password.chars().count() >= MIN_CREDENTIAL_CHARS;
        if !username_ok || !password_ok {
            return Err(AppError::validation(
                "username and password should be at least 3 characters each",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            name: Some("Tero Testaaja".to_string()),
            password: password.to_string(),
        }
    }

    #[test]
    fn short_username_is_rejected() {
        let result = UserService::validate_registration(&registration("as", "salainen"));
        match result {
            Err(AppError::Validation { message }) => {
                assert_eq!(
                    message,
                    "username and password should be at least 3 characters each"
                );
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let result = UserService::validate_registration(&registration("ttestaaj", "sa"));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn both_too_short_is_rejected() {
        assert!(UserService::validate_registration(&registration("ab", "cd")).is_err());
    }

    #[test]
    fn three_character_credentials_pass() {
        assert!(UserService::validate_registration(&registration("abc", "xyz")).is_ok());
    }

    #[test]
    fn multibyte_usernames_are_counted_in_characters() {
        // Two characters even though the byte length exceeds three.
        assert!(UserService::validate_registration(&registration("äö", "salainen")).is_err());
        assert!(UserService::validate_registration(&registration("äöü", "salainen")).is_ok());
    }
}
