//! Request guards.

pub mod api_key;
pub mod auth;

pub use api_key::api_key_middleware;
pub use auth::{CurrentUser, auth_middleware};
