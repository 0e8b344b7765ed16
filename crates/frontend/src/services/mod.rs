//! Thin service layer over the typed API clients.

pub mod auth;
pub mod user;

pub use auth::AuthService;
pub use user::UserService;
