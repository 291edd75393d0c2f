use crate::domain::Credential;

/// Read-only lookup of provisioned credentials.
pub trait CredentialRepository: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<Credential>;
}
