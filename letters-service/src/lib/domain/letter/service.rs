use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::letter::errors::LetterError;
use crate::domain::letter::models::Letter;
use crate::domain::letter::models::LetterId;
use crate::domain::letter::models::PostLetterCommand;
use crate::domain::letter::ports::LetterRepository;
use crate::domain::letter::ports::LetterServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for letter operations.
pub struct LetterService<LR>
where
    LR: LetterRepository,
{
    repository: Arc<LR>,
}

impl<LR> LetterService<LR>
where
    LR: LetterRepository,
{
    /// Create a new letter service with an injected repository.
    pub fn new(repository: Arc<LR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<LR> LetterServicePort for LetterService<LR>
where
    LR: LetterRepository,
{
    async fn post_letter(
        &self,
        owner: UserId,
        command: PostLetterCommand,
    ) -> Result<Letter, LetterError> {
        let letter = Letter {
            id: LetterId::new(),
            sender: command.sender,
            recipient: command.recipient,
            message: command.message,
            user_id: owner,
            created_at: Utc::now(),
        };

        let created_letter = self.repository.create(letter).await?;

        tracing::debug!(
            letter_id = %created_letter.id,
            user_id = %created_letter.user_id,
            "Letter stored"
        );

        Ok(created_letter)
    }

    async fn list_letters(&self, owner: UserId) -> Result<Vec<Letter>, LetterError> {
        self.repository.find_by_owner(owner).await
    }
}
