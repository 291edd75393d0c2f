use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::application::ports::{
    AudioFetcher, AudioRecordRepository, LlmClient, StagedAudio, TranscriptionEngine,
};
use crate::application::services::prompts::summary_prompt;
use crate::domain::{AudioProcessingRecord, AudioSource, NewAudioProcessingRecord};

use super::{ExternalError, PipelineError};

const DEFAULT_AUDIO_FILE_NAME: &str = "audio.mp3";

#[derive(Debug, Clone)]
pub struct AudioProcessingRequest {
    pub audio_link: String,
    pub chat_id: String,
    pub user_id: String,
    pub client_created_at: Option<DateTime<Utc>>,
}

/// Bytes ready for transcription. Holding `_staged` keeps the downloaded file alive until
/// the pipeline finishes, whichever way it exits.
struct AcquiredAudio {
    bytes: Vec<u8>,
    file_name: String,
    source: AudioSource,
    _staged: Option<StagedAudio>,
}

pub struct AudioProcessingService {
    fetcher: Arc<dyn AudioFetcher>,
    transcriber: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    repository: Arc<dyn AudioRecordRepository>,
    fallback_audio_path: PathBuf,
}

impl AudioProcessingService {
    pub fn new(
        fetcher: Arc<dyn AudioFetcher>,
        transcriber: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
        repository: Arc<dyn AudioRecordRepository>,
        fallback_audio_path: PathBuf,
    ) -> Self {
        Self {
            fetcher,
            transcriber,
            llm_client,
            repository,
            fallback_audio_path,
        }
    }

    /// Fetch, transcribe, summarize, then append the record. Nothing is written unless
    /// every earlier stage succeeded.
    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, user_id = %request.user_id))]
    pub async fn process(
        &self,
        request: AudioProcessingRequest,
    ) -> Result<AudioProcessingRecord, PipelineError> {
        let audio = self.acquire(&request.audio_link).await?;

        info!(
            bytes = audio.bytes.len(),
            fallback = audio.source.is_fallback(),
            "Starting audio transcription"
        );
        let transcript = self
            .transcriber
            .transcribe(&audio.bytes, &audio.file_name)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Transcription failed");
                ExternalError::TranscriptionFailed(e.to_string())
            })?;

        info!(chars = transcript.len(), "Generating summary");
        let summary = self
            .llm_client
            .complete(&summary_prompt(&transcript), None)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Summary generation failed");
                ExternalError::SummaryFailed(e.to_string())
            })?;

        let record = NewAudioProcessingRecord::completed(
            request.chat_id,
            request.user_id,
            audio.source,
            transcript,
            summary,
            request.client_created_at,
        );

        info!(process_id = %record.process_id, "Saving audio processing record");
        let saved = self.repository.insert(&record).await.map_err(|e| {
            tracing::error!(error = %e, process_id = %record.process_id, "Database error");
            PipelineError::Persistence(e)
        })?;

        info!(id = saved.id, process_id = %saved.process_id, "Audio processing completed");
        Ok(saved)
    }

    async fn acquire(&self, link: &str) -> Result<AcquiredAudio, ExternalError> {
        info!(link = %link, "Attempting to download audio");

        let fetch_error = match self.fetcher.fetch(link).await {
            Ok(staged) => match staged.read().await {
                Ok(bytes) => {
                    info!(bytes = bytes.len(), "Audio file downloaded");
                    return Ok(AcquiredAudio {
                        bytes,
                        file_name: file_name_from_link(link),
                        source: AudioSource::Remote(link.to_string()),
                        _staged: Some(staged),
                    });
                }
                Err(e) => e,
            },
            Err(e) => e,
        };

        warn!(error = %fetch_error, "Failed to download audio, using fallback asset");

        match tokio::fs::read(&self.fallback_audio_path).await {
            Ok(bytes) => {
                info!(path = %self.fallback_audio_path.display(), "Using fallback audio");
                Ok(AcquiredAudio {
                    bytes,
                    file_name: file_name_from_path(&self.fallback_audio_path),
                    source: AudioSource::Fallback,
                    _staged: None,
                })
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %self.fallback_audio_path.display(),
                    "Fallback audio file unavailable"
                );
                Err(ExternalError::NoAudioSource)
            }
        }
    }
}

/// Transcription providers infer the codec from the extension, so keep the remote name
/// when it has one.
fn file_name_from_link(link: &str) -> String {
    reqwest::Url::parse(link)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|name| Path::new(name).extension().is_some())
        .unwrap_or_else(|| DEFAULT_AUDIO_FILE_NAME.to_string())
}

fn file_name_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|name| Path::new(name).extension().is_some())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_AUDIO_FILE_NAME.to_string())
}
