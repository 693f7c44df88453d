use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the identity resolved by the authorization gate.
///
/// Downstream handlers scope every owned-resource operation to this identity
/// and never accept a client-supplied owner.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware guarding every protected route.
///
/// A missing credential is rejected as 401; a credential that fails
/// verification (bad signature, expired, malformed) as 400. The specific
/// verification failure is logged by the gateway, never returned.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let user_id = state
        .auth_service
        .authorize(token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    // Accept both "Bearer <token>" and a bare token value
    Ok(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}
