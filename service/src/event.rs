//! [`Event`]s emitted by the [`Store`] and their [`Observer`]s.
//!
//! [`Store`]: crate::Store

use common::pagination;
use derive_more::Display;
use tracing as log;

use crate::{
    domain::{favorites::Toggled, user, Theme},
    fetch,
};

/// Notable change of the [`Store`] state.
///
/// [`Store`]: crate::Store
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Event {
    /// Page of users was requested.
    #[display("loading users of page {page}")]
    PageRequested {
        /// Requested page.
        page: pagination::Number,
    },

    /// Page of users was loaded.
    #[display("loaded {count} users of page {page}")]
    PageLoaded {
        /// Loaded page.
        page: pagination::Number,

        /// Number of loaded users.
        count: usize,
    },

    /// Page of users failed to load.
    #[display("failed to load users of page {page}: {error}")]
    PageFailed {
        /// Requested page.
        page: pagination::Number,

        /// Description of the failure.
        error: String,
    },

    /// User details were requested.
    #[display("loading details of `User(id: {id})`")]
    UserRequested {
        /// ID of the requested user.
        id: user::Id,
    },

    /// User details were loaded.
    #[display("loaded details of `User(id: {id})`")]
    UserLoaded {
        /// ID of the loaded user.
        id: user::Id,
    },

    /// User details failed to load.
    #[display("failed to load details of `User(id: {id})`: {error}")]
    UserFailed {
        /// ID of the requested user.
        id: user::Id,

        /// Description of the failure.
        error: String,
    },

    /// Outcome of a fetch was discarded, as a newer one was issued since.
    #[display("discarded outdated {kind} response")]
    ResponseDiscarded {
        /// Kind of the discarded fetch.
        kind: fetch::Kind,
    },

    /// User was selected.
    #[display("selected `User(id: {id})`")]
    UserSelected {
        /// ID of the selected user.
        id: user::Id,
    },

    /// Selection was cleared.
    #[display("cleared user selection")]
    SelectionCleared,

    /// User was added to or removed from the favorites.
    #[display("{toggled} `User(id: {id})` favorite")]
    FavoriteToggled {
        /// ID of the toggled user.
        id: user::Id,

        /// Performed change.
        toggled: Toggled,
    },

    /// Search text was changed.
    #[display("search term updated: {term:?}")]
    SearchTermChanged {
        /// New search text.
        term: String,
    },

    /// Favorites-only view was switched.
    #[display("show favorites only: {enabled}")]
    FavoritesOnlyChanged {
        /// Indicator whether the view is enabled.
        enabled: bool,
    },

    /// Error was dismissed.
    #[display("error cleared")]
    ErrorCleared,

    /// Users data was reset.
    #[display("users data reset")]
    UsersReset,

    /// Color theme was switched.
    #[display("theme toggled to {theme}")]
    ThemeChanged {
        /// New theme.
        theme: Theme,
    },

    /// Persisted value failed to be read or written.
    #[display("failed to persist `{key}`: {error}")]
    PersistenceFailed {
        /// Storage key of the value.
        key: &'static str,

        /// Description of the failure.
        error: String,
    },
}

/// Observer of the [`Event`]s.
pub trait Observer {
    /// Observes the provided [`Event`].
    fn observe(&self, event: &Event);
}

impl<F: Fn(&Event)> Observer for F {
    fn observe(&self, event: &Event) {
        self(event);
    }
}

/// [`Observer`] logging the [`Event`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Log;

impl Observer for Log {
    fn observe(&self, event: &Event) {
        match event {
            Event::PageFailed { .. } | Event::UserFailed { .. } => {
                log::error!("{event}");
            }
            Event::PersistenceFailed { .. } => log::warn!("{event}"),
            Event::PageRequested { .. }
            | Event::UserRequested { .. }
            | Event::ResponseDiscarded { .. } => log::debug!("{event}"),
            Event::PageLoaded { .. }
            | Event::UserLoaded { .. }
            | Event::UserSelected { .. }
            | Event::SelectionCleared
            | Event::FavoriteToggled { .. }
            | Event::SearchTermChanged { .. }
            | Event::FavoritesOnlyChanged { .. }
            | Event::ErrorCleared
            | Event::UsersReset
            | Event::ThemeChanged { .. } => log::info!("{event}"),
        }
    }
}
