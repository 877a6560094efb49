// tests/support/mocks/security.rs
use async_trait::async_trait;
use quire::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

pub const HASH_PREFIX: &str = "plain::";

/// Reversible "hash" so tests stay fast and can inspect stored values.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix(HASH_PREFIX) == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
