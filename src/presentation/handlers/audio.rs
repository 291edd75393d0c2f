use axum::extract::State;
use axum::{Extension, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::AudioProcessingRequest;
use crate::domain::{AudioProcessingRecord, User};
use crate::presentation::error::ApiError;
use crate::presentation::extractors::ApiJson;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AudioProcessingInput {
    pub audio_link: String,
    pub chat_id: String,
    pub user_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AudioProcessingOutput {
    pub process_id: String,
    pub audio_link: String,
    pub audio_text: String,
    pub text_summary: String,
    pub processed_at: String,
    pub status: String,
}

impl From<AudioProcessingRecord> for AudioProcessingOutput {
    fn from(record: AudioProcessingRecord) -> Self {
        Self {
            process_id: record.process_id.into_inner(),
            audio_link: record.audio_link,
            audio_text: record.audio_text,
            text_summary: record.text_summary,
            processed_at: record
                .processed_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            status: record.status.as_str().to_string(),
        }
    }
}

/// Unparseable timestamps are dropped instead of failing the request.
fn parse_created_at(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(created_at = %raw, error = %e, "Ignoring unparseable created_at");
            None
        }
    }
}

#[tracing::instrument(skip_all, fields(username = %user.username, chat_id = %input.chat_id))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    ApiJson(input): ApiJson<AudioProcessingInput>,
) -> Result<Json<AudioProcessingOutput>, ApiError> {
    tracing::info!("Processing audio request");

    let client_created_at = parse_created_at(input.created_at.as_deref());
    let request = AudioProcessingRequest {
        audio_link: input.audio_link,
        chat_id: input.chat_id,
        user_id: input.user_id,
        client_created_at,
    };

    let record = state.audio_service.process(request).await?;
    Ok(Json(record.into()))
}
