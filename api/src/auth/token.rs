//! # Access tokens — HS256 JWTs
//!
//! [`TokenService`] issues and verifies the bearer tokens handed out at login.
//! Tokens are signed with a process-wide secret loaded once from
//! configuration and carry the username as `sub` plus `iat`/`exp` timestamps.
//! Nothing is persisted server-side; verification is a pure function of the
//! token, the secret, and the current time.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to.
    pub sub: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issues and verifies signed, time-limited access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    /// Build a service from the signing secret and token lifetime.
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    /// Issue a token for `subject`, expiring `lifetime` from now.
    pub fn issue(&self, subject: &str) -> anyhow::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("failed to sign token: {e}"))
    }

    /// Verify signature and expiry, returning the subject.
    ///
    /// Any failure — bad signature, malformed token, expired — is `None`;
    /// callers never learn which.
    pub fn verify(&self, token: &str) -> Option<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .ok()
            .map(|data| data.claims.sub)
    }
}
