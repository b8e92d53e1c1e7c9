//! Note row and wire schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `notes` row. Timestamps are stored as RFC 3339 text and decoded here.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: i64,
}

impl Note {
    pub fn to_response(&self) -> NoteResponse {
        NoteResponse {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            owner_id: self.owner_id,
        }
    }
}

/// Body of `POST /api/notes` and `PUT /api/notes/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotePayload {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// A note as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: i64,
}
