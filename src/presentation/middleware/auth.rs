use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::services::AuthError;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Extracts the token from `Authorization: Bearer <token>`. The scheme is case-insensitive.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Rejects the request unless it carries a valid token for an active user, then makes the
/// `User` available to handlers as an extension.
pub async fn require_active_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = {
        let token = bearer_token(request.headers()).ok_or(AuthError::MissingToken)?;
        state.auth_service.resolve_user(token).map_err(|e| {
            tracing::warn!(error = ?e, "Rejected authenticated request");
            e
        })?
    };

    tracing::debug!(username = %user.username, "Request authenticated");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
