//! Roster core types and view-state logic.
//!
//! Everything in this crate is independent of the browser and the network:
//! the user record model, the query identity for paginated fetches, the
//! collection store and its invariants, client-side sorting, aggregate
//! statistics, export rendering and form validation. The frontend crate
//! wires these into Yew components; the http crate speaks the wire format
//! defined by the model here.

pub mod export;
pub mod pager;
pub mod query;
pub mod sort;
pub mod stats;
pub mod store;
pub mod user;
pub mod validate;

pub use pager::Pager;
pub use query::{PageWindow, QueryState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use store::{ResponseGuard, UserStore};
pub use user::{Device, NewUser, Session, User, UserUpdate};
