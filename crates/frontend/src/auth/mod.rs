//! Session state and route guarding.

pub mod context;
pub mod guard;

pub use context::{use_auth, AuthAction, AuthContext, AuthProvider, AuthState};
pub use guard::{PublicOnly, RequireAuth};
