//! HTTP client for the remote Roster user API.
//!
//! All network traffic of the console goes through the typed clients in
//! [`client`]: a public client for login and signup, and an authenticated
//! client that carries the bearer token it was constructed with. One
//! attempt per call; no retries, no timeouts.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedRosterClient, ClientBuilder, PublicRosterClient};
