use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::domain::AccessToken;
use crate::presentation::error::ApiError;
use crate::presentation::extractors::ApiForm;
use crate::presentation::state::AppState;

/// OAuth2 password-grant form. Other grant fields are accepted and ignored.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[tracing::instrument(skip(state, form), fields(username = %form.username))]
pub async fn token_handler(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> Result<Json<AccessToken>, ApiError> {
    let auth_service = state.auth_service.clone();

    // bcrypt verification is CPU bound.
    let result = tokio::task::spawn_blocking(move || {
        auth_service.login(&form.username, &form.password)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    match result {
        Ok(token) => {
            tracing::info!("Login succeeded");
            Ok(Json(token))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login rejected");
            Err(e.into())
        }
    }
}
