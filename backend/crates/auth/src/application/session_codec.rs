//! Session Codec
//!
//! Sessions are held by the client: the cookie value is
//! `base64url(JSON claims) "." base64url(HMAC-SHA256(payload))`.
//! Nothing is stored server-side, so a session ends when its claims
//! expire or the browser drops the cookie.

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use kernel::id::UserId;
use platform::crypto;
use serde::{Deserialize, Serialize};

use crate::application::config::{AuthConfig, MIN_SESSION_SECRET_LEN};
use crate::error::{AuthError, AuthResult};

/// What a session asserts about its holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub username: String,
    /// Unix epoch milliseconds
    pub expires_at_ms: i64,
}

impl SessionClaims {
    pub fn new(user_id: UserId, username: impl Into<String>, ttl: Duration) -> Self {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self {
            user_id,
            username: username.into(),
            expires_at_ms: Utc::now().timestamp_millis().saturating_add(ttl_ms),
        }
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }
}

/// Turns claims into a cookie value and back
pub trait SessionCodec: Send + Sync {
    fn encode(&self, claims: &SessionClaims) -> AuthResult<String>;

    /// Fails with `AuthError::SessionInvalid` for anything malformed,
    /// tampered or expired.
    fn decode(&self, token: &str) -> AuthResult<SessionClaims>;
}

/// HMAC-SHA256 signed claims
#[derive(Clone)]
pub struct HmacSessionCodec {
    secret: Vec<u8>,
}

impl HmacSessionCodec {
    pub fn new(secret: impl Into<Vec<u8>>) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(AuthError::Internal(format!(
                "session secret must be at least {MIN_SESSION_SECRET_LEN} bytes"
            )));
        }
        if secret.iter().all(|&b| b == 0) {
            return Err(AuthError::Internal("session secret is all zeros".to_string()));
        }
        Ok(Self { secret })
    }

    pub fn from_config(config: &AuthConfig) -> AuthResult<Self> {
        Self::new(config.session_secret.clone())
    }
}

impl SessionCodec for HmacSessionCodec {
    fn encode(&self, claims: &SessionClaims) -> AuthResult<String> {
        let json = serde_json::to_vec(claims)
            .map_err(|e| AuthError::Internal(format!("Failed to encode session: {e}")))?;
        let payload = crypto::to_base64_url(&json);
        let tag = crypto::hmac_sha256(&self.secret, payload.as_bytes());

        Ok(format!("{}.{}", payload, crypto::to_base64_url(&tag)))
    }

    fn decode(&self, token: &str) -> AuthResult<SessionClaims> {
        let (payload, tag) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

        let tag = crypto::from_base64_url(tag).map_err(|_| AuthError::SessionInvalid)?;
        if !crypto::hmac_sha256_verify(&self.secret, payload.as_bytes(), &tag) {
            tracing::debug!("Session signature mismatch");
            return Err(AuthError::SessionInvalid);
        }

        let json = crypto::from_base64_url(payload).map_err(|_| AuthError::SessionInvalid)?;
        let claims: SessionClaims =
            serde_json::from_slice(&json).map_err(|_| AuthError::SessionInvalid)?;

        if claims.is_expired() {
            tracing::debug!(user_id = %claims.user_id, "Session expired");
            return Err(AuthError::SessionInvalid);
        }

        Ok(claims)
    }
}

impl fmt::Debug for HmacSessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSessionCodec")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
