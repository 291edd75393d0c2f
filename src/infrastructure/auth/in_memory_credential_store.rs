use std::collections::HashMap;

use crate::application::ports::CredentialRepository;
use crate::domain::Credential;

/// Credentials provisioned at startup. Never mutated afterwards.
pub struct InMemoryCredentialStore {
    credentials: HashMap<String, Credential>,
}

impl InMemoryCredentialStore {
    /// Later entries win when a username appears twice.
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        Self {
            credentials: credentials
                .into_iter()
                .map(|c| (c.username.clone(), c))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialRepository for InMemoryCredentialStore {
    fn find_by_username(&self, username: &str) -> Option<Credential> {
        self.credentials.get(username).cloned()
    }
}
