mod audio_fetcher;
mod credential_repository;
mod llm_client;
mod password_hasher;
mod record_repository;
mod repository_error;
mod token_service;
mod transcription_engine;

pub use audio_fetcher::{AudioFetchError, AudioFetcher, StagedAudio};
pub use credential_repository::CredentialRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use password_hasher::{HashError, PasswordHasher};
pub use record_repository::{AudioRecordRepository, NarrativeRecordRepository};
pub use repository_error::RepositoryError;
pub use token_service::{TokenError, TokenService};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
