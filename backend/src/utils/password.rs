//! Password hashing and verification.
//!
//! Bcrypt embeds the salt and cost factor in the hash string, so
//! verification needs no external configuration.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Hashes a plaintext password for storage.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ServiceError::internal(format!("password hashing failed: {}", e)))
}

/// Verifies a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a failed verification, never an
/// error to the caller.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let password_hash = hash_password("vicodin4ever").unwrap();

        assert!(verify_password("vicodin4ever", &password_hash));
        assert!(!verify_password("wrong", &password_hash));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_verifies_as_false() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }
}
