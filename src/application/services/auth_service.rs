use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::application::ports::{CredentialRepository, PasswordHasher, TokenService};
use crate::domain::{AccessToken, User};

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

const TIMING_DECOY_PASSWORD: &str = "carescribe-timing-decoy";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    BadCredentials,
    #[error("Not authenticated")]
    MissingToken,
    #[error("Could not validate credentials")]
    InvalidOrExpired,
    #[error("Could not validate credentials")]
    UnknownUser,
    #[error("Inactive user")]
    InactiveUser,
    #[error("token issuance failed: {0}")]
    Issuance(String),
}

/// Login and bearer-token resolution over the credential store.
pub struct AuthService {
    credentials: Arc<dyn CredentialRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    token_ttl: Duration,
    /// Verified against when the username is unknown, so both paths pay for one hash check.
    decoy_hash: Option<String>,
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        token_ttl: Duration,
    ) -> Self {
        let decoy_hash = hasher
            .hash(TIMING_DECOY_PASSWORD)
            .map_err(|e| warn!(error = %e, "Could not prepare decoy password hash"))
            .ok();

        Self {
            credentials,
            hasher,
            tokens,
            token_ttl,
            decoy_hash,
        }
    }

    /// Returns the user only when the password matches the stored hash.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        let Some(credential) = self.credentials.find_by_username(username) else {
            if let Some(decoy) = &self.decoy_hash {
                let _ = self.hasher.verify(password, decoy);
            }
            return None;
        };

        match self.hasher.verify(password, &credential.hashed_password) {
            Ok(true) => Some(credential.user()),
            Ok(false) => None,
            Err(e) => {
                warn!(error = %e, "Stored password hash is unusable");
                None
            }
        }
    }

    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let user = self
            .authenticate(username, password)
            .ok_or(AuthError::BadCredentials)?;

        let token = self
            .tokens
            .issue(&user.username, self.token_ttl)
            .map_err(|e| AuthError::Issuance(e.to_string()))?;

        debug!(ttl_secs = self.token_ttl.as_secs(), "Access token issued");
        Ok(token)
    }

    /// Resolves a bearer token to an active user.
    pub fn resolve_user(&self, token: &str) -> Result<User, AuthError> {
        let subject = self
            .tokens
            .validate(token)
            .map_err(|_| AuthError::InvalidOrExpired)?;

        let user = self
            .credentials
            .find_by_username(&subject)
            .map(|c| c.user())
            .ok_or(AuthError::UnknownUser)?;

        if !user.is_active() {
            return Err(AuthError::InactiveUser);
        }

        Ok(user)
    }
}
