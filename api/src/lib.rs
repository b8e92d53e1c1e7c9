//! # api — personal notes manager backend
//!
//! Everything between the socket and the database:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, HS256 access tokens, the `CurrentUser` extractor |
//! | [`db`] | SQLite pool and schema bootstrap |
//! | [`models`] | `users`/`notes` rows and their wire-format projections |
//! | [`users`] | account lookup, creation (store-enforced uniqueness), credential checks |
//! | [`notes`] | owner-scoped note CRUD |
//! | [`routes`] | axum handlers and router |
//! | [`error`] | the `ApiError` taxonomy and its status-code mapping |
//!
//! The binary crate (`server`) loads configuration, builds an [`AppState`]
//! from a pool and a [`auth::TokenService`], and serves [`router`].

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod notes;
pub mod routes;
pub mod state;
pub mod users;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
