//! Authentication: password hashing, access tokens, request identity.

mod identity;
mod password;
mod token;

pub use identity::CurrentUser;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};
