// Password hashing and verification

use crate::auth::error::AuthError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password service for hashing and verification
///
/// Uses Argon2id with the library defaults and a fresh random salt per hash.
/// Hashing is deliberately expensive; callers on the request path run it via
/// `tokio::task::spawn_blocking`.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    /// Verify a password against a stored hash
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHashError)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext() {
        let hash = PasswordService::hash_password("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn verify_accepts_original_password() {
        let hash = PasswordService::hash_password("secret123").unwrap();
        assert!(PasswordService::verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_other_passwords() {
        let hash = PasswordService::hash_password("secret123").unwrap();
        assert!(!PasswordService::verify_password("secret124", &hash).unwrap());
        assert!(!PasswordService::verify_password("", &hash).unwrap());
        assert!(!PasswordService::verify_password("SECRET123", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Random salt per hash
        let a = PasswordService::hash_password("secret123").unwrap();
        let b = PasswordService::hash_password("secret123").unwrap();
        assert_ne!(a, b);
        assert!(PasswordService::verify_password("secret123", &a).unwrap());
        assert!(PasswordService::verify_password("secret123", &b).unwrap());
    }

    #[test]
    fn verify_fails_on_garbage_hash() {
        assert!(PasswordService::verify_password("secret123", "not-a-hash").is_err());
    }
}
