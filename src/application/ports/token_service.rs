use std::time::Duration;

use crate::domain::AccessToken;

pub trait TokenService: Send + Sync {
    fn issue(&self, subject: &str, ttl: Duration) -> Result<AccessToken, TokenError>;

    /// Returns the embedded subject of a correctly signed, unexpired token.
    fn validate(&self, token: &str) -> Result<String, TokenError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("invalid or expired token")]
    InvalidOrExpired,
}
