use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::letter::errors::LetterError;
use crate::domain::letter::models::Letter;
use crate::domain::letter::models::LetterBody;
use crate::domain::letter::models::LetterId;
use crate::domain::letter::models::PartyLabel;
use crate::domain::letter::ports::LetterRepository;
use crate::domain::user::models::UserId;

/// Letter store backed by Postgres.
pub struct PostgresLetterRepository {
    pool: PgPool,
}

impl PostgresLetterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LetterRow {
    id: Uuid,
    sender: String,
    recipient: String,
    message: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<LetterRow> for Letter {
    type Error = LetterError;

    fn try_from(row: LetterRow) -> Result<Self, Self::Error> {
        Ok(Letter {
            id: LetterId(row.id),
            sender: PartyLabel::new(row.sender)?,
            recipient: PartyLabel::new(row.recipient)?,
            message: LetterBody::new(row.message)?,
            user_id: UserId(row.user_id),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LetterRepository for PostgresLetterRepository {
    async fn create(&self, letter: Letter) -> Result<Letter, LetterError> {
        sqlx::query(
            r#"
            INSERT INTO letters (id, sender, recipient, message, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(letter.id.0)
        .bind(letter.sender.as_str())
        .bind(letter.recipient.as_str())
        .bind(letter.message.as_str())
        .bind(letter.user_id.0)
        .bind(letter.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| LetterError::DatabaseError(e.to_string()))?;

        Ok(letter)
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Letter>, LetterError> {
        let rows = sqlx::query_as::<_, LetterRow>(
            r#"
            SELECT id, sender, recipient, message, user_id, created_at
            FROM letters
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LetterError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Letter::try_from).collect()
    }
}
