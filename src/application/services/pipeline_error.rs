use crate::application::ports::RepositoryError;

/// Failures of the external AI and file collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ExternalError {
    #[error("Both download and fallback audio file unavailable")]
    NoAudioSource,
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("Summary generation failed: {0}")]
    SummaryFailed(String),
    #[error("Narrative generation failed: {0}")]
    NarrativeFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    External(#[from] ExternalError),
    #[error("Database error: {0}")]
    Persistence(#[from] RepositoryError),
}
