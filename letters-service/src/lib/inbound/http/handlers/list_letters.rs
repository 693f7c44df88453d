use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::LetterData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// List the authenticated user's letters, newest first.
///
/// The scope is always the identity resolved by the authorization gate; a
/// client cannot request another user's letters.
pub async fn list_letters(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<LetterData>>, ApiError> {
    state
        .letter_service
        .list_letters(auth.user_id)
        .await
        .map_err(ApiError::from)
        .map(|letters| {
            ApiSuccess::new(
                StatusCode::OK,
                letters.iter().map(LetterData::from).collect(),
            )
        })
}
