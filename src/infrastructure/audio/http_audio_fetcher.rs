use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioFetchError, AudioFetcher, StagedAudio};

const STAGED_FILE_PREFIX: &str = "audio-";

/// Downloads remote audio into a temporary file under `staging_dir`.
pub struct HttpAudioFetcher {
    client: reqwest::Client,
    staging_dir: PathBuf,
    timeout: Duration,
}

impl HttpAudioFetcher {
    pub fn new(staging_dir: PathBuf, timeout: Duration) -> Result<Self, AudioFetchError> {
        std::fs::create_dir_all(&staging_dir).map_err(|e| {
            AudioFetchError::Staging(format!("{}: {}", staging_dir.display(), e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AudioFetchError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            staging_dir,
            timeout,
        })
    }

    fn map_request_error(&self, e: reqwest::Error) -> AudioFetchError {
        if e.is_timeout() {
            AudioFetchError::Timeout(self.timeout.as_secs())
        } else {
            AudioFetchError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch(&self, link: &str) -> Result<StagedAudio, AudioFetchError> {
        let response = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !response.status().is_success() {
            return Err(AudioFetchError::BadStatus(response.status().as_u16()));
        }

        let temp = tempfile::Builder::new()
            .prefix(STAGED_FILE_PREFIX)
            .tempfile_in(&self.staging_dir)
            .map_err(|e| AudioFetchError::Staging(e.to_string()))?;

        let std_file = temp
            .reopen()
            .map_err(|e| AudioFetchError::Staging(e.to_string()))?;
        let mut file = tokio::fs::File::from_std(std_file);

        let mut total_bytes: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| self.map_request_error(e))?;
            total_bytes += bytes.len() as u64;
            file.write_all(&bytes)
                .await
                .map_err(|e| AudioFetchError::Staging(e.to_string()))?;
        }
        file.flush()
            .await
            .map_err(|e| AudioFetchError::Staging(e.to_string()))?;

        tracing::debug!(
            bytes = total_bytes,
            path = %temp.path().display(),
            "Audio staged"
        );

        Ok(StagedAudio::new(temp))
    }
}
