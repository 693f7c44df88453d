use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are classified so the caller can log the specific
/// cause while presenting a single rejection to the client.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
