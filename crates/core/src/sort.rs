//! Client-side ordering of the rendered page.
//!
//! Sorting applies to the page snapshot only; it never changes what the
//! store holds or which rows the gateway returns.

use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Email,
    LoginTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Current sort selection. Clicking the active column flips the order;
/// clicking another column selects it ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub order: SortOrder,
}

impl SortState {
    pub fn click(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.order = self.order.toggled();
        } else {
            self.column = Some(column);
            self.order = SortOrder::Asc;
        }
    }

    /// Orders a page snapshot. With no column selected the rows come back
    /// in gateway order.
    #[must_use]
    pub fn apply(&self, users: &[User]) -> Vec<User> {
        let mut sorted = users.to_vec();
        if let Some(column) = self.column {
            sorted.sort_by(|a, b| {
                let ord = match column {
                    SortColumn::Name => a
                        .full_name()
                        .to_lowercase()
                        .cmp(&b.full_name().to_lowercase()),
                    SortColumn::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
                    // A user with no session sorts before any recorded login
                    SortColumn::LoginTime => a.last_active_time().cmp(&b.last_active_time()),
                };
                match self.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }
        sorted
    }
}
