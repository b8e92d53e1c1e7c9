//! Database rows and their wire-format projections.

mod note;
mod user;

pub use note::{Note, NotePayload, NoteResponse};
pub use user::{LoginRequest, RegisterRequest, TokenResponse, User, UserResponse};
