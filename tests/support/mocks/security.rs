// tests/support/mocks/security.rs
use async_trait::async_trait;

use byline_core::application::error::ApplicationError;
use byline_core::application::identity::CallerIdentity;
use byline_core::application::ports::security::{PasswordHasher, TokenManager};
use byline_core::application::ApplicationResult;
use byline_core::domain::user::UserId;

/// Deterministic stand-in for the argon2 adapter. The "hash" is the plain
/// password behind a fixed prefix, so a registered account can log back in
/// with the same password and a wrong one is still rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthenticated("invalid credentials"))
        }
    }
}

/// Token manager whose tokens are `token-<user id>`, no signing involved.
/// Tests can mint a caller for an arbitrary id without going through login.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<String> {
        Ok(format!("token-{}", i64::from(user_id)))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<CallerIdentity> {
        let id = token
            .strip_prefix("token-")
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| ApplicationError::unauthenticated("invalid token"))?;
        let user_id =
            UserId::new(id).map_err(|_| ApplicationError::unauthenticated("invalid token"))?;
        Ok(CallerIdentity::new(user_id))
    }
}
