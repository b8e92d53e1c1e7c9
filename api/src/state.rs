//! Shared application state.

use sqlx::SqlitePool;

use crate::auth::TokenService;

/// Everything a handler needs: the connection pool and the token service.
///
/// The signing secret lives inside [`TokenService`], built once at startup
/// from configuration and read-only from then on. There is no other shared
/// mutable state; each request stands alone.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: SqlitePool, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
