use chrono::{DateTime, Utc};

use super::{AudioSource, ProcessId, RecordStatus};

/// A fully processed audio request, ready to be appended to the store.
#[derive(Debug, Clone)]
pub struct NewAudioProcessingRecord {
    pub process_id: ProcessId,
    pub chat_id: String,
    pub user_id: String,
    pub source: AudioSource,
    pub audio_text: String,
    pub text_summary: String,
    pub processed_at: DateTime<Utc>,
    pub status: RecordStatus,
    /// Timestamp reported by the caller; the row's own `created_at` is set by the store.
    pub client_created_at: Option<DateTime<Utc>>,
}

impl NewAudioProcessingRecord {
    pub fn completed(
        chat_id: String,
        user_id: String,
        source: AudioSource,
        audio_text: String,
        text_summary: String,
        client_created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            process_id: ProcessId::derive(&chat_id, &user_id),
            chat_id,
            user_id,
            source,
            audio_text,
            text_summary,
            processed_at: Utc::now(),
            status: RecordStatus::Completed,
            client_created_at,
        }
    }

    pub fn audio_link(&self) -> &str {
        self.source.label()
    }
}

/// A persisted row of `audio_processing_records`.
#[derive(Debug, Clone)]
pub struct AudioProcessingRecord {
    pub id: i64,
    pub process_id: ProcessId,
    pub chat_id: String,
    pub user_id: String,
    pub audio_link: String,
    pub audio_text: String,
    pub text_summary: String,
    pub processed_at: DateTime<Utc>,
    pub status: RecordStatus,
    pub client_created_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
