//! [`Command`] definition.

pub mod clear_error;
pub mod request_page;
pub mod request_user_detail;
pub mod reset_users;
pub mod select_user;
pub mod set_search_term;
pub mod set_show_favorites_only;
pub mod toggle_favorite;
pub mod toggle_theme;

/// [`Command`] of the [`Store`] awaiting a [`Remote`] service.
///
/// [`Remote`]: crate::infra::Remote
/// [`Store`]: crate::Store
pub use common::Handler as Command;

/// [`Command`] of the [`Store`] applied immediately.
///
/// [`Store`]: crate::Store
pub use common::Dispatch;

pub use self::{
    clear_error::ClearError, request_page::RequestPage,
    request_user_detail::RequestUserDetail, reset_users::ResetUsers,
    select_user::SelectUser, set_search_term::SetSearchTerm,
    set_show_favorites_only::SetShowFavoritesOnly,
    toggle_favorite::ToggleFavorite, toggle_theme::ToggleTheme,
};

/// Outcome of a remote fetch [`Command`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Settled {
    /// Fetch succeeded and its result was applied to the [`State`].
    ///
    /// [`State`]: crate::State
    Succeeded,

    /// Fetch failed and the error was recorded into the [`State`].
    ///
    /// [`State`]: crate::State
    Failed,

    /// Fetch settled after a newer one of the same kind was issued, so its
    /// outcome was discarded.
    Discarded,
}
