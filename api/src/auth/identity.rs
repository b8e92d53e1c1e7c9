//! Per-request identity resolution.
//!
//! [`CurrentUser`] is an extractor: handlers that take it only run once the
//! bearer token has been verified and its subject resolved to a live account.
//! A missing header, a bad or expired token, and a user deleted after the
//! token was issued all reject with the same generic unauthorized error.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::error::ApiError;
use crate::models::User;
use crate::state::AppState;
use crate::users;

/// The authenticated caller, resolved from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let subject = state.tokens.verify(token).ok_or(ApiError::Unauthorized)?;

        // The token may outlive the account it was issued to.
        let user = users::find_by_username(&state.db, &subject)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}
