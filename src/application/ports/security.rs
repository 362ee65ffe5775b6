// src/application/ports/security.rs
use crate::application::{ApplicationResult, identity::CallerIdentity};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<String>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<CallerIdentity>;
}
