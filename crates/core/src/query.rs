//! Query identity for paginated, filtered user fetches.

use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is selected. Shared by the pagination
/// controller and the gateway so an omitted size means the same thing on
/// both sides of the call.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the listing view.
pub const PAGE_SIZE_OPTIONS: [usize; 2] = [5, 10];

/// A zero-based page window over the remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageWindow {
    #[must_use]
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// The 1-based page number the gateway expects.
    #[must_use]
    pub fn gateway_page(&self) -> usize {
        self.page_index + 1
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The tuple that determines which page of users should be fetched.
/// Changing any component invalidates the previously fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub page: PageWindow,
    pub search: String,
}

impl QueryState {
    #[must_use]
    pub fn new(page_index: usize, page_size: usize, search: impl Into<String>) -> Self {
        Self {
            page: PageWindow::new(page_index, page_size),
            search: search.into(),
        }
    }
}

/// Number of pages needed to hold `total` rows.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_page_is_one_based() {
        assert_eq!(PageWindow::new(0, 5).gateway_page(), 1);
        assert_eq!(PageWindow::new(3, 10).gateway_page(), 4);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_count(12, 10), 2);
    }

    #[test]
    fn test_query_identity_includes_search() {
        let a = QueryState::new(0, 5, "");
        let b = QueryState::new(0, 5, "ada");
        assert_ne!(a, b);
        assert_eq!(a, QueryState::new(0, 5, ""));
    }
}
