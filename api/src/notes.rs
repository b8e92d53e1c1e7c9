//! # Note repository
//!
//! CRUD against the `notes` table. Every operation takes the owning user's id
//! and applies it as a filter; that filter is the entire authorization model.
//! "Does not exist" and "owned by someone else" are deliberately the same
//! outcome, so note ids leak nothing across accounts.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Note;

/// All notes owned by `owner_id`, newest-updated first.
pub async fn list_notes(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, title, content, created_at, updated_at, owner_id \
         FROM notes WHERE owner_id = ? ORDER BY updated_at DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// A single note, scoped to its owner.
pub async fn get_note(
    pool: &SqlitePool,
    note_id: i64,
    owner_id: i64,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, title, content, created_at, updated_at, owner_id \
         FROM notes WHERE id = ? AND owner_id = ?",
    )
    .bind(note_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Create a note. Both timestamps start equal.
pub async fn create_note(
    pool: &SqlitePool,
    owner_id: i64,
    title: &str,
    content: Option<&str>,
) -> Result<Note, sqlx::Error> {
    let now = Utc::now();
    let done = sqlx::query(
        "INSERT INTO notes (title, content, created_at, updated_at, owner_id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(title)
    .bind(content)
    .bind(now.to_rfc3339())
    .bind(now.to_rfc3339())
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(Note {
        id: done.last_insert_rowid(),
        title: title.to_string(),
        content: content.map(str::to_string),
        created_at: now,
        updated_at: now,
        owner_id,
    })
}

/// Replace a note's title and content and refresh `updated_at`.
///
/// Re-resolves through [`get_note`] first, so the same ownership scoping
/// applies; `created_at` is never touched.
pub async fn update_note(
    pool: &SqlitePool,
    note_id: i64,
    owner_id: i64,
    title: &str,
    content: Option<&str>,
) -> Result<Option<Note>, sqlx::Error> {
    if get_note(pool, note_id, owner_id).await?.is_none() {
        return Ok(None);
    }

    sqlx::query("UPDATE notes SET title = ?, content = ?, updated_at = ? WHERE id = ? AND owner_id = ?")
        .bind(title)
        .bind(content)
        .bind(Utc::now().to_rfc3339())
        .bind(note_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    get_note(pool, note_id, owner_id).await
}

/// Delete a note permanently. `false` if it doesn't exist under this owner.
pub async fn delete_note(
    pool: &SqlitePool,
    note_id: i64,
    owner_id: i64,
) -> Result<bool, sqlx::Error> {
    if get_note(pool, note_id, owner_id).await?.is_none() {
        return Ok(false);
    }

    sqlx::query("DELETE FROM notes WHERE id = ? AND owner_id = ?")
        .bind(note_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(true)
}
