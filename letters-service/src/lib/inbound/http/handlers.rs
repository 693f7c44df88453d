use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::letter::errors::LetterError;
use crate::domain::letter::models::Letter;
use crate::user::errors::UserError;

pub mod list_letters;
pub mod login;
pub mod post_letter;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Client-facing error taxonomy.
///
/// Domain errors are translated into these coarse kinds at the boundary;
/// internal detail stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Email already registered".to_string())
            }
            UserError::InvalidCredentials => ApiError::BadRequest("Invalid credentials".to_string()),
            UserError::InvalidToken => {
                ApiError::BadRequest("Invalid or expired token".to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                tracing::error!(cause = %err, "Internal error handling auth request");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<LetterError> for ApiError {
    fn from(err: LetterError) -> Self {
        match err {
            LetterError::InvalidLetterId(_)
            | LetterError::InvalidParty(_)
            | LetterError::InvalidBody(_) => ApiError::BadRequest(err.to_string()),
            LetterError::DatabaseError(_) | LetterError::Unknown(_) => {
                tracing::error!(cause = %err, "Internal error handling letter request");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Letter record as returned to the owning client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterData {
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Letter> for LetterData {
    fn from(letter: &Letter) -> Self {
        Self {
            id: letter.id.to_string(),
            sender: letter.sender.as_str().to_string(),
            recipient: letter.recipient.as_str().to_string(),
            message: letter.message.as_str().to_string(),
            created_at: letter.created_at,
        }
    }
}
