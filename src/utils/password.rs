use crate::error::AppResult;
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, PasswordVerifier, phc::PasswordHash},
};

/// Hashes a plaintext password with Argon2id and a fresh random salt.
///
/// The returned string is a PHC-formatted hash and never equals the
/// plaintext; it is the only password representation that gets persisted.
pub fn hash_password(password: &str) -> AppResult<String> {
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes())?.to_string();
    Ok(password_hash)
}

/// Verifies a plaintext password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)?;
    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext() {
        let hash = hash_password("salainen").unwrap();
        assert_ne!(hash, "salainen");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn correct_password_verifies() {
        let hash = hash_password("password123").unwrap();
        assert!(verify_password("password123", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("password123").unwrap();
        assert!(!verify_password("password124", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let first = hash_password("sekret").unwrap();
        let second = hash_password("sekret").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("sekret", &first).unwrap());
        assert!(verify_password("sekret", &second).unwrap());
    }
}
