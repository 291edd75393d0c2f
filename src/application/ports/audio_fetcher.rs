use std::path::Path;

use async_trait::async_trait;
use tempfile::NamedTempFile;

/// Audio downloaded into a temporary file. The file is removed when this value is dropped.
#[derive(Debug)]
pub struct StagedAudio {
    file: NamedTempFile,
}

impl StagedAudio {
    pub fn new(file: NamedTempFile) -> Self {
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub async fn read(&self) -> Result<Vec<u8>, AudioFetchError> {
        tokio::fs::read(self.path())
            .await
            .map_err(|e| AudioFetchError::Staging(e.to_string()))
    }
}

#[async_trait]
pub trait AudioFetcher: Send + Sync {
    async fn fetch(&self, link: &str) -> Result<StagedAudio, AudioFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioFetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {0}")]
    BadStatus(u16),
    #[error("timed out after {0}s")]
    Timeout(u64),
    #[error("staging failed: {0}")]
    Staging(String),
}
