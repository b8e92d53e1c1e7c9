//! HTTP surface: register, login, note CRUD, health.
//!
//! Handlers validate input, delegate to [`crate::users`] / [`crate::notes`],
//! and translate component outcomes into status codes. Every note handler
//! takes [`CurrentUser`], so an unauthenticated request never reaches the
//! repository.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::models::{
    LoginRequest, NotePayload, NoteResponse, RegisterRequest, TokenResponse, UserResponse,
};
use crate::state::AppState;
use crate::{notes, users};

/// Longest accepted note title, matching the column bound.
const MAX_TITLE_LEN: usize = 255;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/:id", put(update_note).delete(delete_note))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness check.
async fn health() -> Json<Value> {
    Json(json!({ "message": "Healthy" }))
}

/// Register a new account.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Username and password are required".to_string(),
        ));
    }

    let user = users::create_user(&state.db, username, &req.password)
        .await?
        .ok_or(ApiError::UsernameTaken)?;

    tracing::info!("Registered user: {}", user.username);
    Ok(Json(user.to_response()))
}

/// Exchange credentials for an access token.
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = users::authenticate_user(&state.db, &form.username, &form.password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let access_token = state.tokens.issue(&user.username)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// List the caller's notes, newest-updated first.
async fn list_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = notes::list_notes(&state.db, user.id).await?;
    Ok(Json(notes.iter().map(|n| n.to_response()).collect()))
}

/// Create a note for the caller.
async fn create_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    validate_title(&payload.title)?;

    let note = notes::create_note(
        &state.db,
        user.id,
        &payload.title,
        payload.content.as_deref(),
    )
    .await?;

    tracing::info!("User {} created note {}", user.username, note.id);
    Ok((StatusCode::CREATED, Json(note.to_response())))
}

/// Replace a note's title and content.
async fn update_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<i64>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteResponse>, ApiError> {
    validate_title(&payload.title)?;

    let note = notes::update_note(
        &state.db,
        note_id,
        user.id,
        &payload.title,
        payload.content.as_deref(),
    )
    .await?
    .ok_or(ApiError::NoteNotFound)?;

    Ok(Json(note.to_response()))
}

/// Delete a note permanently.
async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = notes::delete_note(&state.db, note_id, user.id).await?;
    if !deleted {
        return Err(ApiError::NoteNotFound);
    }

    tracing::info!("User {} deleted note {}", user.username, note_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Reject empty or oversized titles before anything touches the store.
fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::InvalidRequest(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}
