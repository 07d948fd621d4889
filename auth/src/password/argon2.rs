use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Salted one-way password hasher (Argon2id).
///
/// Output is a PHC string: algorithm, parameters, and salt travel with the
/// hash, so verification needs no side channel.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC string hash.
    ///
    /// A mismatch is `Ok(false)`, never an error. An error is returned only
    /// when the stored hash is structurally corrupt.
    ///
    /// # Errors
    /// * `VerificationFailed` - hash string is malformed or unreadable
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
