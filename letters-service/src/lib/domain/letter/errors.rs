use thiserror::Error;

/// Error for LetterId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LetterIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for sender/recipient label validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartyLabelError {
    #[error("Label must not be empty")]
    Empty,

    #[error("Label too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for letter body validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LetterBodyError {
    #[error("Message must not be empty")]
    Empty,

    #[error("Message too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for letter operations
#[derive(Debug, Clone, Error)]
pub enum LetterError {
    #[error("Invalid letter ID: {0}")]
    InvalidLetterId(#[from] LetterIdError),

    #[error("Invalid sender or recipient: {0}")]
    InvalidParty(#[from] PartyLabelError),

    #[error("Invalid message: {0}")]
    InvalidBody(#[from] LetterBodyError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
