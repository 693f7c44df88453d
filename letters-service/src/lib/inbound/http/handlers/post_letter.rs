use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::LetterData;
use crate::domain::letter::errors::LetterBodyError;
use crate::domain::letter::errors::PartyLabelError;
use crate::domain::letter::models::LetterBody;
use crate::domain::letter::models::PartyLabel;
use crate::domain::letter::models::PostLetterCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn post_letter(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(body): Json<PostLetterRequest>,
) -> Result<ApiSuccess<LetterData>, ApiError> {
    state
        .letter_service
        .post_letter(auth.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref letter| ApiSuccess::new(StatusCode::CREATED, letter.into()))
}

/// HTTP request body for posting a letter (raw JSON).
///
/// Carries no owner field; the owning identity comes from the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostLetterRequest {
    sender: String,
    recipient: String,
    message: String,
}

#[derive(Debug, Clone, Error)]
enum ParsePostLetterRequestError {
    #[error("Invalid sender or recipient: {0}")]
    Party(#[from] PartyLabelError),

    #[error("Invalid message: {0}")]
    Body(#[from] LetterBodyError),
}

impl PostLetterRequest {
    fn try_into_command(self) -> Result<PostLetterCommand, ParsePostLetterRequestError> {
        let sender = PartyLabel::new(self.sender)?;
        let recipient = PartyLabel::new(self.recipient)?;
        let message = LetterBody::new(self.message)?;
        Ok(PostLetterCommand::new(sender, recipient, message))
    }
}

impl From<ParsePostLetterRequestError> for ApiError {
    fn from(err: ParsePostLetterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
