use bcrypt::DEFAULT_COST;

use crate::application::ports::{HashError, PasswordHasher};

pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, HashError> {
        bcrypt::hash(plain, self.cost).map_err(|e| HashError::HashingFailed(e.to_string()))
    }

    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, HashError> {
        bcrypt::verify(plain, hashed).map_err(|e| HashError::MalformedHash(e.to_string()))
    }
}
