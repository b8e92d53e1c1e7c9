//! # User directory
//!
//! Account lookup, creation, and credential checks against the `users` table.
//!
//! Creation does not pre-check the username: the INSERT is attempted and the
//! store's unique constraint is the authoritative conflict signal, so two
//! concurrent registrations of the same name can never both succeed.

use sqlx::SqlitePool;

use crate::auth::{hash_password, verify_password};
use crate::error::ApiError;
use crate::models::User;

/// Look up an account by username.
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, password_hash FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Create an account, hashing the password first.
///
/// `Ok(None)` means the username is already taken (unique-constraint
/// violation); any other database failure propagates.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, ApiError> {
    let password_hash = hash_password(password)?;

    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(username)
        .bind(&password_hash)
        .execute(pool)
        .await;

    match result {
        Ok(done) => Ok(Some(User {
            id: done.last_insert_rowid(),
            username: username.to_string(),
            password_hash,
        })),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Check a username/password pair.
///
/// Unknown username and wrong password are indistinguishable: both are
/// `Ok(None)`, so callers cannot enumerate accounts.
pub async fn authenticate_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let Some(user) = find_by_username(pool, username).await? else {
        return Ok(None);
    };
    if !verify_password(password, &user.password_hash) {
        return Ok(None);
    }
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn pool() -> SqlitePool {
        db::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let pool = pool().await;
        let created = create_user(&pool, "alice", "pw1").await.unwrap().unwrap();

        let user = authenticate_user(&pool, "alice", "pw1")
            .await
            .unwrap()
            .expect("valid credentials accepted");
        assert_eq!(user.id, created.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_both_reject() {
        let pool = pool().await;
        create_user(&pool, "alice", "pw1").await.unwrap().unwrap();

        assert!(authenticate_user(&pool, "alice", "pw2")
            .await
            .unwrap()
            .is_none());
        assert!(authenticate_user(&pool, "nobody", "pw1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_username_conflicts_once() {
        let pool = pool().await;
        assert!(create_user(&pool, "alice", "pw1").await.unwrap().is_some());
        assert!(create_user(&pool, "alice", "pw2").await.unwrap().is_none());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind("alice")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn stored_hash_is_not_the_plaintext() {
        let pool = pool().await;
        let user = create_user(&pool, "alice", "pw1").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "pw1");
        assert!(user.password_hash.starts_with("$argon2id$"));
    }
}
