//! Typed clients for the remote user API.

pub mod auth;
pub mod error;
mod typed;
pub mod users;

pub use error::ClientError;
pub use typed::{AuthenticatedRosterClient, ClientBuilder, PublicRosterClient};
