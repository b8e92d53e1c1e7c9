//! SQLite access: pool construction and schema bootstrap.
//!
//! The pool is built once at startup from the configured database URL and
//! handed to every handler through [`crate::state::AppState`]. The store owns
//! the two integrity rules the rest of the code depends on: the unique
//! constraint on `users.username` and the foreign key from `notes.owner_id`.

mod pool;

pub use pool::connect;
