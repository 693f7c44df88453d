use thiserror::Error;

/// Error type for password operations.
///
/// A verification mismatch is not an error: `verify` returns `Ok(false)`.
/// `InvalidDigest` signals a corrupt stored digest, which is a data-integrity
/// fault rather than a failed login attempt.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password digest is malformed: {0}")]
    InvalidDigest(String),
}
