mod bcrypt_password_hasher;
mod in_memory_credential_store;
mod jwt_token_service;

pub use bcrypt_password_hasher::BcryptPasswordHasher;
pub use in_memory_credential_store::InMemoryCredentialStore;
pub use jwt_token_service::{Claims, JwtTokenService};
