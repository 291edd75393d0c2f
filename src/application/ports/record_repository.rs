use async_trait::async_trait;

use crate::domain::{
    AudioProcessingRecord, NarrativeRecord, NewAudioProcessingRecord, NewNarrativeRecord,
};

use super::RepositoryError;

/// Append-only store for processed audio requests.
#[async_trait]
pub trait AudioRecordRepository: Send + Sync {
    async fn insert(
        &self,
        record: &NewAudioProcessingRecord,
    ) -> Result<AudioProcessingRecord, RepositoryError>;
}

/// Append-only store for combined narratives.
#[async_trait]
pub trait NarrativeRecordRepository: Send + Sync {
    async fn insert(&self, record: &NewNarrativeRecord) -> Result<NarrativeRecord, RepositoryError>;
}
