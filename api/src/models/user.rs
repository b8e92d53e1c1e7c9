//! # User model
//!
//! Two representations of an account:
//!
//! - [`User`] — the complete `users` row, loaded via [`sqlx::FromRow`]. Carries the
//!   Argon2 `password_hash` and therefore never crosses the wire.
//! - [`UserResponse`] — the client-safe projection (`id`, `username`), produced by
//!   [`User::to_response`].
//!
//! The request schemas for the two auth endpoints live here as well.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full account record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl User {
    /// Project into the shape safe to send to clients.
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Account information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Form body of `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
