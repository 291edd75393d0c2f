use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use carescribe::application::ports::{
    AudioFetchError, AudioFetcher, AudioRecordRepository, LlmClient, LlmClientError,
    NarrativeRecordRepository, RepositoryError, StagedAudio, TranscriptionEngine,
    TranscriptionError,
};
use carescribe::domain::{
    AudioProcessingRecord, NarrativeRecord, NewAudioProcessingRecord, NewNarrativeRecord,
};

pub struct FailingFetcher;

#[async_trait]
impl AudioFetcher for FailingFetcher {
    async fn fetch(&self, _link: &str) -> Result<StagedAudio, AudioFetchError> {
        Err(AudioFetchError::RequestFailed("connection refused".to_string()))
    }
}

/// Stages fixed bytes into `dir`, as if they had been downloaded.
pub struct BytesFetcher {
    pub dir: PathBuf,
    pub bytes: Vec<u8>,
}

#[async_trait]
impl AudioFetcher for BytesFetcher {
    async fn fetch(&self, _link: &str) -> Result<StagedAudio, AudioFetchError> {
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| AudioFetchError::Staging(e.to_string()))?;
        file.write_all(&self.bytes)
            .map_err(|e| AudioFetchError::Staging(e.to_string()))?;
        Ok(StagedAudio::new(file))
    }
}

pub struct StubTranscriber {
    result: Result<String, String>,
    pub received: Mutex<Vec<(Vec<u8>, String)>>,
}

impl StubTranscriber {
    pub fn returning(transcript: &str) -> Self {
        Self {
            result: Ok(transcript.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl TranscriptionEngine for StubTranscriber {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        file_name: &str,
    ) -> Result<String, TranscriptionError> {
        self.received
            .lock()
            .unwrap()
            .push((audio_data.to_vec(), file_name.to_string()));
        self.result
            .clone()
            .map_err(TranscriptionError::ApiRequestFailed)
    }
}

pub struct RecordingLlmClient {
    result: Result<String, String>,
    pub prompts: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingLlmClient {
    pub fn returning(answer: &str) -> Self {
        Self {
            result: Ok(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<(String, Option<String>)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: Option<&str>,
    ) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push((
            system_prompt.to_string(),
            user_message.map(str::to_string),
        ));
        self.result.clone().map_err(LlmClientError::ApiRequestFailed)
    }
}

#[derive(Default)]
pub struct InMemoryAudioRecords {
    fail: bool,
    pub records: Mutex<Vec<NewAudioProcessingRecord>>,
}

impl InMemoryAudioRecords {
    pub fn failing() -> Self {
        Self {
            fail: true,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl AudioRecordRepository for InMemoryAudioRecords {
    async fn insert(
        &self,
        record: &NewAudioProcessingRecord,
    ) -> Result<AudioProcessingRecord, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::ConnectionFailed(
                "database unavailable".to_string(),
            ));
        }

        let mut records = self.records.lock().unwrap();
        records.push(record.clone());

        Ok(AudioProcessingRecord {
            id: records.len() as i64,
            process_id: record.process_id.clone(),
            chat_id: record.chat_id.clone(),
            user_id: record.user_id.clone(),
            audio_link: record.audio_link().to_string(),
            audio_text: record.audio_text.clone(),
            text_summary: record.text_summary.clone(),
            processed_at: record.processed_at,
            status: record.status,
            client_created_at: record.client_created_at,
            created_at: Utc::now(),
        })
    }
}

#[derive(Default)]
pub struct InMemoryNarrativeRecords {
    fail: bool,
    pub records: Mutex<Vec<NewNarrativeRecord>>,
}

impl InMemoryNarrativeRecords {
    pub fn failing() -> Self {
        Self {
            fail: true,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl NarrativeRecordRepository for InMemoryNarrativeRecords {
    async fn insert(&self, record: &NewNarrativeRecord) -> Result<NarrativeRecord, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::QueryFailed("insert rejected".to_string()));
        }

        let mut records = self.records.lock().unwrap();
        records.push(record.clone());

        Ok(NarrativeRecord {
            id: records.len() as i64,
            visit_id: record.visit_id.clone(),
            chat_id: record.chat_id.clone(),
            user_id: record.user_id.clone(),
            narrative: record.narrative.clone(),
            status: record.status,
            created_at: Utc::now(),
        })
    }
}
