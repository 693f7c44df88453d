use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::letter::errors::LetterBodyError;
use crate::domain::letter::errors::LetterIdError;
use crate::domain::letter::errors::PartyLabelError;
use crate::domain::user::models::UserId;

/// Letter aggregate entity.
///
/// A stored message record. `user_id` is the owning identity: bound from the
/// authenticated user at creation, never taken from the client, never
/// reassigned. Sender and recipient are free-text labels with no link to the
/// user table.
#[derive(Debug, Clone)]
pub struct Letter {
    pub id: LetterId,
    pub sender: PartyLabel,
    pub recipient: PartyLabel,
    pub message: LetterBody,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Letter unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterId(pub Uuid);

impl LetterId {
    /// Generate a new random letter ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a letter ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, LetterIdError> {
        Uuid::parse_str(s)
            .map(LetterId)
            .map_err(|e| LetterIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for LetterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Sender or recipient label value type.
///
/// Free text, 1-128 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyLabel(String);

impl PartyLabel {
    const MAX_LENGTH: usize = 128;

    /// Create a new validated label.
    ///
    /// # Errors
    /// * `Empty` - Label is empty or whitespace only
    /// * `TooLong` - Label exceeds 128 characters
    pub fn new(label: String) -> Result<Self, PartyLabelError> {
        let label = label.trim().to_string();
        if label.is_empty() {
            Err(PartyLabelError::Empty)
        } else if label.len() > Self::MAX_LENGTH {
            Err(PartyLabelError::TooLong {
                max: Self::MAX_LENGTH,
                actual: label.len(),
            })
        } else {
            Ok(Self(label))
        }
    }

    /// Get label as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Letter body value type with validation.
///
/// Ensures the message is non-empty and within the 4000 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBody(String);

impl LetterBody {
    const MAX_LENGTH: usize = 4000;

    /// Create a new validated letter body.
    ///
    /// # Errors
    /// * `Empty` - Body is empty string
    /// * `TooLong` - Body exceeds 4000 characters
    pub fn new(message: String) -> Result<Self, LetterBodyError> {
        let length = message.len();
        if length == 0 {
            Err(LetterBodyError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(LetterBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(message))
        }
    }

    /// Get body as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to post a new letter with domain types.
///
/// Deliberately carries no owner: the owning identity comes from the
/// authorization gate, never from the request payload.
#[derive(Debug)]
pub struct PostLetterCommand {
    pub sender: PartyLabel,
    pub recipient: PartyLabel,
    pub message: LetterBody,
}

impl PostLetterCommand {
    /// Construct a new post letter command.
    pub fn new(sender: PartyLabel, recipient: PartyLabel, message: LetterBody) -> Self {
        Self {
            sender,
            recipient,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_label_rejects_empty() {
        assert!(matches!(
            PartyLabel::new("  ".to_string()),
            Err(PartyLabelError::Empty)
        ));
    }

    #[test]
    fn test_party_label_accepts_free_text() {
        let label = PartyLabel::new("Aunt Edna (next door)".to_string()).unwrap();
        assert_eq!(label.as_str(), "Aunt Edna (next door)");
    }

    #[test]
    fn test_letter_body_rejects_empty() {
        assert!(matches!(
            LetterBody::new(String::new()),
            Err(LetterBodyError::Empty)
        ));
    }

    #[test]
    fn test_letter_body_rejects_too_long() {
        let result = LetterBody::new("x".repeat(4001));
        assert!(matches!(result, Err(LetterBodyError::TooLong { .. })));
    }
}
