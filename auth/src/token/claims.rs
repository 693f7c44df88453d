use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a bearer token.
///
/// The token is a stateless assertion of identity: subject, issued-at, and
/// absolute expiry. Nothing else is embedded and nothing is persisted
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject expiring `ttl` from now.
    pub fn expiring_in(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check if the embedded expiry has passed.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiring_in() {
        let claims = Claims::expiring_in("user123", Duration::hours(1));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
