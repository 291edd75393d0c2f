use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::ports::{HashError, PasswordHasher};
use crate::application::services::DEFAULT_TOKEN_TTL;
use crate::domain::Credential;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub openai: OpenAiSettings,
    pub audio: AudioSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub fallback_audio_path: PathBuf,
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: u64,
    #[serde(default)]
    pub users: Vec<UserSettings>,
}

/// A provisioned account. `password` is hashed at startup and meant for local setups only.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    pub username: String,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub json_format: bool,
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("auth.jwt_secret must not be empty")]
    EmptySecret,
    #[error("user {0} has neither password_hash nor password")]
    MissingPassword(String),
    #[error("user {0}: {1}")]
    Hash(String, HashError),
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_staging_dir() -> PathBuf {
    std::env::temp_dir().join("carescribe")
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_token_ttl_minutes() -> u64 {
    DEFAULT_TOKEN_TTL.as_secs() / 60
}

impl Settings {
    /// Layers `appsettings.{env}.toml` (optional) under `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(SettingsError::EmptySecret);
        }
        Ok(())
    }
}

impl AuthSettings {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_minutes * 60)
    }

    pub fn credentials(
        &self,
        hasher: &dyn PasswordHasher,
    ) -> Result<Vec<Credential>, SettingsError> {
        self.users.iter().map(|u| u.to_credential(hasher)).collect()
    }
}

impl UserSettings {
    /// A stored hash wins over a plaintext password.
    pub fn to_credential(&self, hasher: &dyn PasswordHasher) -> Result<Credential, SettingsError> {
        let hashed_password = match (&self.password_hash, &self.password) {
            (Some(hash), _) => hash.clone(),
            (None, Some(plain)) => hasher
                .hash(plain)
                .map_err(|e| SettingsError::Hash(self.username.clone(), e))?,
            (None, None) => return Err(SettingsError::MissingPassword(self.username.clone())),
        };

        Ok(Credential::new(
            self.username.clone(),
            hashed_password,
            self.disabled,
        ))
    }
}

impl OpenAiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AudioSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl DatabaseSettings {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
