//! Pagination and filter controller state.
//!
//! Owns the (page index, page size, search term) triple. Every transition
//! that changes the resulting [`QueryState`] is the trigger for exactly one
//! list call; transitions that would leave the window out of bounds are
//! rejected before they reach the gateway.

use crate::query::{page_count, PageWindow, QueryState, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
    search: String,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl Pager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The query this state resolves to.
    #[must_use]
    pub fn query(&self) -> QueryState {
        QueryState {
            page: PageWindow::new(self.page_index, self.page_size),
            search: self.search.clone(),
        }
    }

    /// Changing the page size snaps back to the first page; the search term
    /// is kept. A zero or unchanged size is not a transition.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 || size == self.page_size {
            return false;
        }
        self.page_size = size;
        self.page_index = 0;
        true
    }

    /// Applies a stabilized search term. The window snaps back to the first
    /// page so it stays in bounds of a narrowed result set. Returns false
    /// when the term is unchanged, so re-delivery of the same debounced
    /// value does not refetch.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.page_index = 0;
        true
    }

    /// Moves to `index` when it lies within `[0, page_count)`. Out-of-range
    /// requests are rejected and never issued to the gateway.
    pub fn set_page(&mut self, index: usize, total: usize) -> bool {
        if index != 0 && index >= page_count(total, self.page_size) {
            return false;
        }
        if index == self.page_index {
            return false;
        }
        self.page_index = index;
        true
    }

    /// Pulls the window back to the last page that still exists after the
    /// collection shrank, e.g. when the only row of the final page was
    /// deleted. Returns true when the index moved.
    pub fn clamp_to(&mut self, total: usize) -> bool {
        let last = page_count(total, self.page_size).saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        self.set_page(self.page_index + 1, total)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page_index == 0 {
            return false;
        }
        self.page_index -= 1;
        true
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.page_index > 0
    }

    #[must_use]
    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < page_count(total, self.page_size)
    }

    /// Human label for the visible window, e.g. `1–5 of 12`.
    #[must_use]
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0 of 0".to_string();
        }
        let start = self.page_index * self.page_size + 1;
        let end = ((self.page_index + 1) * self.page_size).min(total);
        format!("{start}–{end} of {total}")
    }
}
