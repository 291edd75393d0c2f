use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{AudioRecordRepository, RepositoryError};
use crate::domain::{AudioProcessingRecord, NewAudioProcessingRecord, ProcessId, RecordStatus};

pub struct PgAudioRecordRepository {
    pool: PgPool,
}

impl PgAudioRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AudioRecordRow {
    id: i64,
    process_id: String,
    chat_id: String,
    user_id: String,
    audio_link: String,
    audio_text: String,
    text_summary: String,
    processed_at: DateTime<Utc>,
    status: String,
    client_created_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AudioRecordRow> for AudioProcessingRecord {
    type Error = RepositoryError;

    fn try_from(r: AudioRecordRow) -> Result<Self, Self::Error> {
        let status = r
            .status
            .parse::<RecordStatus>()
            .map_err(RepositoryError::QueryFailed)?;

        Ok(AudioProcessingRecord {
            id: r.id,
            process_id: ProcessId::from_string(r.process_id),
            chat_id: r.chat_id,
            user_id: r.user_id,
            audio_link: r.audio_link,
            audio_text: r.audio_text,
            text_summary: r.text_summary,
            processed_at: r.processed_at,
            status,
            client_created_at: r.client_created_at,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl AudioRecordRepository for PgAudioRecordRepository {
    #[instrument(skip(self, record), fields(process_id = %record.process_id))]
    async fn insert(
        &self,
        record: &NewAudioProcessingRecord,
    ) -> Result<AudioProcessingRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AudioRecordRow>(
            r#"
            INSERT INTO audio_processing_records
                (process_id, chat_id, user_id, audio_link, audio_text, text_summary,
                 processed_at, status, client_created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, process_id, chat_id, user_id, audio_link, audio_text, text_summary,
                      processed_at, status, client_created_at, created_at
            "#,
        )
        .bind(record.process_id.as_str())
        .bind(&record.chat_id)
        .bind(&record.user_id)
        .bind(record.audio_link())
        .bind(&record.audio_text)
        .bind(&record.text_summary)
        .bind(record.processed_at)
        .bind(record.status.as_str())
        .bind(record.client_created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.try_into()
    }
}
