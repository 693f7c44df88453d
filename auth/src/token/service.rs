use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Holds the process-wide signing secret, loaded once at startup and never
/// rotated during the process lifetime. The service is read-only after
/// construction and safe for unsynchronized concurrent use.
/// Uses HS256 (HMAC with SHA-256).
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (at least 32 bytes for HS256; keep it in
    ///   configuration, never in code)
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a token asserting `subject`, expiring `ttl` from now.
    ///
    /// # Returns
    /// Compact signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString) -> Result<String, TokenError> {
        self.encode(&Claims::expiring_in(subject, self.ttl))
    }

    /// Verify a token and return its subject.
    ///
    /// Validates the signature and the embedded expiry; has no side effects.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Expired` - Embedded expiry is in the past
    /// * `Malformed` - Token cannot be parsed or lacks required claims
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims.sub)
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}
