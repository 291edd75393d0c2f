use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub disabled: bool,
}

impl User {
    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

/// Provisioned login material for a single user.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub hashed_password: String,
    pub disabled: bool,
}

impl Credential {
    pub fn new(username: String, hashed_password: String, disabled: bool) -> Self {
        Self {
            username,
            hashed_password,
            disabled,
        }
    }

    pub fn user(&self) -> User {
        User {
            username: self.username.clone(),
            disabled: self.disabled,
        }
    }
}
