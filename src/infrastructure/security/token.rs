// src/infrastructure/security/token.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    identity::CallerIdentity,
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Claims {
    sub: i64,
    iat: i64,
    exp: i64,
}

/// Stateless bearer tokens: a JSON claims payload and an HMAC-SHA256 tag,
/// each base64url-encoded and joined with a dot. Verification recomputes
/// the tag in constant time, then checks expiry against the injected clock.
pub struct HmacTokenManager {
    config: TokenConfig,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(self.config.secret.as_bytes())
            .map_err(|err| ApplicationError::dependency(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<String> {
        let now = self.clock.now();
        let claims = Claims {
            sub: user_id.into(),
            iat: now.timestamp(),
            exp: (now + self.config.ttl).timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::dependency(err.to_string()))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        let tag = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(tag)
        ))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<CallerIdentity> {
        let invalid = || ApplicationError::unauthenticated("invalid token");

        let (payload_b64, tag_b64) = token.split_once('.').ok_or_else(invalid)?;
        let payload = URL_SAFE_NO_PAD.decode(payload_b64).map_err(|_| invalid())?;
        let tag = URL_SAFE_NO_PAD.decode(tag_b64).map_err(|_| invalid())?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&tag).map_err(|_| invalid())?;

        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| invalid())?;
        if claims.exp <= self.clock.now().timestamp() {
            return Err(ApplicationError::unauthenticated("expired token"));
        }

        let user_id = UserId::new(claims.sub).map_err(|_| invalid())?;
        Ok(CallerIdentity::new(user_id))
    }
}
