//! [`State`] definitions.

use common::pagination;

#[cfg(doc)]
use crate::Store;
use crate::{
    domain::{Favorites, Theme, User},
    read,
};

/// Aggregate of everything the [`Store`] knows.
///
/// Mutated by the [`Store`] operations only: consumers observe a read-only
/// snapshot of it.
#[derive(Clone, Debug, Default)]
pub struct State {
    /// [`User`]s of the current page.
    pub(crate) users: Vec<User>,

    /// [`User`] whose details were requested last.
    pub(crate) selected_user: Option<User>,

    /// Favorite [`User`]s.
    pub(crate) favorites: Favorites,

    /// Indicator whether a fetch is outstanding.
    pub(crate) loading: bool,

    /// Message describing the last failed fetch.
    pub(crate) error: Option<String>,

    /// Pagination of the last successfully fetched page.
    pub(crate) page: pagination::Info,

    /// Text to search the current page [`User`]s by.
    pub(crate) search_term: String,

    /// Indicator whether only [`Favorites`] should be visible.
    pub(crate) show_favorites_only: bool,

    /// Color [`Theme`] preference.
    pub(crate) theme: Theme,
}

impl State {
    /// Returns the [`User`]s of the current page.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the selected [`User`], if any.
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.selected_user.as_ref()
    }

    /// Returns the [`Favorites`].
    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Indicates whether a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message describing the last failed fetch, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the number of the current page.
    #[must_use]
    pub fn current_page(&self) -> pagination::Number {
        self.page.page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> pagination::Number {
        self.page.total_pages
    }

    /// Returns the full [`pagination::Info`] of the current page.
    #[must_use]
    pub fn page_info(&self) -> pagination::Info {
        self.page
    }

    /// Returns the search text.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Indicates whether only [`Favorites`] are visible.
    #[must_use]
    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    /// Returns the color [`Theme`] preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Derives the visible [`User`]s of the current page.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn visible_users(&self) -> Vec<User> {
        read::user::list::Filter {
            search: &self.search_term,
            favorites: self.show_favorites_only.then_some(&self.favorites),
        }
        .apply(&self.users)
    }
}
