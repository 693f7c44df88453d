use async_trait::async_trait;

use crate::domain::letter::errors::LetterError;
use crate::domain::letter::models::Letter;
use crate::domain::letter::models::PostLetterCommand;
use crate::domain::user::models::UserId;

/// Port for letter domain service operations.
///
/// `owner` is always the identity resolved by the authorization gate.
#[async_trait]
pub trait LetterServicePort: Send + Sync + 'static {
    /// Store a letter owned by the authenticated user.
    ///
    /// # Arguments
    /// * `owner` - Owning user identity from the authorization gate
    /// * `command` - Validated sender, recipient, and message
    ///
    /// # Returns
    /// Created letter entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn post_letter(
        &self,
        owner: UserId,
        command: PostLetterCommand,
    ) -> Result<Letter, LetterError>;

    /// Retrieve the letters owned by a user, newest first.
    ///
    /// Only letters whose owning identity equals `owner` are returned.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_letters(&self, owner: UserId) -> Result<Vec<Letter>, LetterError>;
}

/// Persistence operations for letter records.
#[async_trait]
pub trait LetterRepository: Send + Sync + 'static {
    /// Persist a new letter entity.
    ///
    /// # Arguments
    /// * `letter` - Letter entity to create
    ///
    /// # Returns
    /// Created letter entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, letter: Letter) -> Result<Letter, LetterError>;

    /// Retrieve letters by owning identity, newest first.
    ///
    /// # Arguments
    /// * `owner` - Owning user identity
    ///
    /// # Returns
    /// Vector of letters ordered by creation time descending
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Letter>, LetterError>;
}
