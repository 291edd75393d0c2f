use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{NarrativeRecordRepository, RepositoryError};
use crate::domain::{NarrativeRecord, NewNarrativeRecord, RecordStatus};

pub struct PgNarrativeRecordRepository {
    pool: PgPool,
}

impl PgNarrativeRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NarrativeRow {
    id: i64,
    visit_id: String,
    chat_id: String,
    user_id: String,
    narrative: String,
    status: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl NarrativeRecordRepository for PgNarrativeRecordRepository {
    #[instrument(skip(self, record), fields(visit_id = %record.visit_id))]
    async fn insert(&self, record: &NewNarrativeRecord) -> Result<NarrativeRecord, RepositoryError> {
        let r = sqlx::query_as::<_, NarrativeRow>(
            r#"
            INSERT INTO narrative_records (visit_id, chat_id, user_id, narrative, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, visit_id, chat_id, user_id, narrative, status, created_at
            "#,
        )
        .bind(&record.visit_id)
        .bind(&record.chat_id)
        .bind(&record.user_id)
        .bind(&record.narrative)
        .bind(record.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let status = r
            .status
            .parse::<RecordStatus>()
            .map_err(RepositoryError::QueryFailed)?;

        Ok(NarrativeRecord {
            id: r.id,
            visit_id: r.visit_id,
            chat_id: r.chat_id,
            user_id: r.user_id,
            narrative: r.narrative,
            status,
            created_at: r.created_at,
        })
    }
}
