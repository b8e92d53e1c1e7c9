//! Error type shared by every handler.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Duplicate username on registration.
    #[error("Username already registered")]
    UsernameTaken,

    /// Login rejected. Unknown username and wrong password both land here.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, expired, or bound to a vanished user.
    #[error("Could not validate credentials")]
    Unauthorized,

    /// Note does not exist under the caller's ownership scope.
    #[error("Note not found")]
    NoteNotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::UsernameTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::NoteNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        if matches!(
            self,
            ApiError::InvalidCredentials | ApiError::Unauthorized
        ) {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
