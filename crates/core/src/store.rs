//! Client-side store for the fetched page of users.
//!
//! The store holds exactly one page's worth of records matching the last
//! successfully resolved query, the collection total as declared by the
//! gateway, and a per-query page cache. It never mixes rows from two
//! different query states.

use std::collections::HashMap;

use crate::query::QueryState;
use crate::user::User;

/// One resolved page, remembered per query so revisiting it can skip the
/// network round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPage {
    pub users: Vec<User>,
    pub total_users: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStore {
    users: Vec<User>,
    total_users: usize,
    loading: bool,
    pages: HashMap<QueryState, CachedPage>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The collection total as last declared by the gateway. Never inferred
    /// from the local array length.
    #[must_use]
    pub fn total_users(&self) -> usize {
        self.total_users
    }

    /// True from call issuance to resolution. Gates spinner and disable
    /// states only, not correctness.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    pub fn set_total_users(&mut self, total: usize) {
        self.total_users = total;
    }

    /// Records a resolved fetch and caches it under its query.
    pub fn apply_page(&mut self, query: QueryState, users: Vec<User>, total_users: usize) {
        self.users = users.clone();
        self.total_users = total_users;
        self.loading = false;
        self.pages.insert(query, CachedPage { users, total_users });
    }

    /// A previously resolved page for this exact query, if any. The cache is
    /// keyed by the full query state, so a page fetched under a different
    /// search term can never satisfy a lookup.
    #[must_use]
    pub fn cached_page(&self, query: &QueryState) -> Option<&CachedPage> {
        self.pages.get(query)
    }

    /// Promotes a cache hit into the visible page. Returns false on a miss.
    pub fn apply_cached(&mut self, query: &QueryState) -> bool {
        if let Some(page) = self.pages.get(query) {
            self.users = page.users.clone();
            self.total_users = page.total_users;
            self.loading = false;
            true
        } else {
            false
        }
    }

    /// Drops every cached page. Called after any successful mutation, since
    /// page contents shift under inserts and deletes.
    pub fn invalidate_cache(&mut self) {
        self.pages.clear();
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Replaces the record with a matching id; no-op when absent.
    pub fn update_user(&mut self, user: User) {
        if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
            *existing = user;
        }
    }

    /// Removes the record with the given id from the visible page.
    /// Idempotent: a second call with the same id changes nothing.
    pub fn remove_user(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    /// Applies a confirmed remote delete: drops the row, decrements the
    /// declared total by exactly one (never below zero) and invalidates the
    /// page cache. Callers invoke this only after the gateway reported
    /// success; a failed delete leaves the store untouched.
    pub fn confirm_delete(&mut self, id: &str) {
        self.remove_user(id);
        self.total_users = self.total_users.saturating_sub(1);
        self.invalidate_cache();
    }
}

/// Orders out-of-order fetch resolutions.
///
/// Every outgoing list call takes a monotonically increasing sequence
/// number; a resolution is applied only if it carries the highest number
/// admitted so far. A late stale response can therefore never overwrite a
/// fresher page. Applies to failures too, so a stale error cannot clobber
/// a newer success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseGuard {
    next_seq: u64,
    last_admitted: u64,
}

impl ResponseGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags an outgoing call.
    pub fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Admits a resolution. Returns false when a newer one already landed.
    pub fn admit(&mut self, seq: u64) -> bool {
        if seq > self.last_admitted {
            self.last_admitted = seq;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            first_name: id.to_uppercase(),
            last_name: "Test".into(),
            email: format!("{id}@example.com"),
            password: None,
            sessions: vec![],
            devices: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_remove_user_is_idempotent() {
        let mut store = UserStore::new();
        store.set_users(vec![user("u1"), user("u2")]);
        assert!(store.remove_user("u1"));
        assert_eq!(store.users().len(), 1);
        assert!(!store.remove_user("u1"));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_confirm_delete_decrements_total_exactly_once() {
        let mut store = UserStore::new();
        store.set_users(vec![user("u1"), user("u2")]);
        store.set_total_users(12);
        store.confirm_delete("u1");
        assert_eq!(store.total_users(), 11);
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_total_never_goes_below_zero() {
        let mut store = UserStore::new();
        store.set_total_users(0);
        store.confirm_delete("ghost");
        assert_eq!(store.total_users(), 0);
    }

    #[test]
    fn test_update_user_replaces_by_id() {
        let mut store = UserStore::new();
        store.set_users(vec![user("u1")]);
        let mut changed = user("u1");
        changed.email = "changed@example.com".into();
        store.update_user(changed.clone());
        assert_eq!(store.users()[0].email, "changed@example.com");
        // Unknown id is a no-op
        store.update_user(user("u9"));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_cache_is_keyed_by_full_query_state() {
        let mut store = UserStore::new();
        let unfiltered = QueryState::new(0, 5, "");
        let filtered = QueryState::new(0, 5, "ada");
        store.apply_page(unfiltered.clone(), vec![user("u1"), user("u2")], 2);
        // Same page window, different search term: must miss
        assert!(store.cached_page(&filtered).is_none());
        assert!(store.cached_page(&unfiltered).is_some());
        assert!(!store.apply_cached(&filtered));
        assert!(store.apply_cached(&unfiltered));
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn test_invalidate_cache_clears_all_pages() {
        let mut store = UserStore::new();
        let query = QueryState::new(0, 5, "");
        store.apply_page(query.clone(), vec![user("u1")], 1);
        store.invalidate_cache();
        assert!(store.cached_page(&query).is_none());
    }

    #[test]
    fn test_apply_page_clears_loading() {
        let mut store = UserStore::new();
        store.set_loading(true);
        store.apply_page(QueryState::new(0, 5, ""), vec![], 0);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_response_guard_discards_stale_resolution() {
        let mut guard = ResponseGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        // Newer call resolves first
        assert!(guard.admit(second));
        // Late arrival of the older call is discarded
        assert!(!guard.admit(first));
    }

    #[test]
    fn test_response_guard_admits_in_order_resolutions() {
        let mut guard = ResponseGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(guard.admit(first));
        assert!(guard.admit(second));
    }

    #[test]
    fn test_response_guard_rejects_duplicate_admission() {
        let mut guard = ResponseGuard::new();
        let seq = guard.issue();
        assert!(guard.admit(seq));
        assert!(!guard.admit(seq));
    }
}
