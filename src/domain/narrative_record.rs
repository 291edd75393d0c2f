use chrono::{DateTime, Utc};

use super::RecordStatus;

#[derive(Debug, Clone)]
pub struct NewNarrativeRecord {
    pub visit_id: String,
    pub chat_id: String,
    pub user_id: String,
    pub narrative: String,
    pub status: RecordStatus,
}

impl NewNarrativeRecord {
    pub fn success(visit_id: String, chat_id: String, user_id: String, narrative: String) -> Self {
        Self {
            visit_id,
            chat_id,
            user_id,
            narrative,
            status: RecordStatus::Success,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NarrativeRecord {
    pub id: i64,
    pub visit_id: String,
    pub chat_id: String,
    pub user_id: String,
    pub narrative: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
}
