use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// Every call to `hash` draws a fresh random salt, so hashing the same
/// plaintext twice yields two different digests.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher with secure default parameters.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format digest (embeds algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Recomputes the hash under the salt and parameters embedded in the
    /// digest and compares.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `digest` - Stored digest in PHC string format
    ///
    /// # Returns
    /// True iff the password matches the digest
    ///
    /// # Errors
    /// * `InvalidDigest` - Stored digest cannot be parsed; distinct from a
    ///   mismatch, which is `Ok(false)`
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed_digest =
            PasswordHash::new(digest).map_err(|e| PasswordError::InvalidDigest(e.to_string()))?;

        let argon2 = Argon2::default();

        match argon2.verify_password(password.as_bytes(), &parsed_digest) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::InvalidDigest(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
