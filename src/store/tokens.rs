use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SESSION_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs session tokens handed out by `/api/login`.
///
/// Every token embeds a fresh UUID as its `jti`, so two logins never yield the
/// same string even within the same second. Nothing in the mock verifies them.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(SESSION_LIFETIME_HOURS)).timestamp(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.key)
    }
}
