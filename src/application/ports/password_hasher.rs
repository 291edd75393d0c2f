pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, HashError>;

    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, HashError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),
    #[error("malformed hash: {0}")]
    MalformedHash(String),
}
