use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::application::services::NarrativeRequest;
use crate::domain::{NarrativeRecord, User};
use crate::presentation::error::ApiError;
use crate::presentation::extractors::ApiJson;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NarrativeInput {
    pub visit_id: String,
    pub chat_id: String,
    pub user_id: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NarrativeOutput {
    pub visit_id: String,
    pub chat_id: String,
    pub user_id: String,
    pub narrative: String,
    pub status: String,
}

impl From<NarrativeRecord> for NarrativeOutput {
    fn from(record: NarrativeRecord) -> Self {
        Self {
            visit_id: record.visit_id,
            chat_id: record.chat_id,
            user_id: record.user_id,
            narrative: record.narrative,
            status: record.status.as_str().to_string(),
        }
    }
}

#[tracing::instrument(skip_all, fields(username = %user.username, visit_id = %input.visit_id))]
pub async fn combine_narrative_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    ApiJson(input): ApiJson<NarrativeInput>,
) -> Result<Json<NarrativeOutput>, ApiError> {
    tracing::info!("Processing narrative request");

    let request = NarrativeRequest {
        visit_id: input.visit_id,
        chat_id: input.chat_id,
        user_id: input.user_id,
        entries: input.entries,
    };

    let record = state.narrative_service.combine(request).await?;
    Ok(Json(record.into()))
}
