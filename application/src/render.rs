//! Plain-text rendering of the [`State`].
//!
//! [`State`]: service::State

use std::{fmt::Write as _, num::NonZeroU32};

use common::pagination;
use service::domain::{Theme, User};

/// Maximum number of page numbers shown by a [`pager()`].
pub const PAGER_WIDTH: NonZeroU32 = NonZeroU32::MIN.saturating_add(4);

/// Renders a one-line card of the provided [`User`].
#[must_use]
pub fn card(user: &User, favorite: bool) -> String {
    format!(
        "{} #{:<3} {} <{}>",
        if favorite { '★' } else { '☆' },
        user.id.get(),
        user.full_name(),
        user.email,
    )
}

/// Renders details of the provided [`User`].
#[must_use]
pub fn details(user: &User, favorite: bool) -> String {
    format!(
        "{}\n  email:    {}\n  avatar:   {}\n  favorite: {}",
        user.full_name(),
        user.email,
        user.avatar,
        if favorite { "yes" } else { "no" },
    )
}

/// Renders the "Showing X to Y of Z" summary of the provided page.
///
/// [`None`] is returned if the page holds no items.
#[must_use]
pub fn summary(info: &pagination::Info) -> Option<String> {
    info.items().map(|items| {
        format!(
            "Showing {} to {} of {} users",
            items.start(),
            items.end(),
            info.total,
        )
    })
}

/// Renders a pager of the provided page, highlighting the current one.
///
/// Detached first and last pages are shown separately, with an ellipsis if
/// some pages in between are omitted.
#[must_use]
pub fn pager(info: &pagination::Info) -> String {
    let window = info.window(PAGER_WIDTH);

    let mut out = String::new();
    out.push_str(if info.has_previous_page() { "‹" } else { " " });
    if window.detached_first() {
        out.push_str(" 1");
        if window.leading_gap() {
            out.push_str(" …");
        }
    }
    for page in window.pages() {
        _ = if page == info.page {
            write!(out, " [{page}]")
        } else {
            write!(out, " {page}")
        };
    }
    if window.detached_last() {
        if window.trailing_gap() {
            out.push_str(" …");
        }
        _ = write!(out, " {}", window.total);
    }
    out.push_str(if info.has_next_page() { " ›" } else { "  " });
    out
}

/// Renders the name of the provided [`Theme`].
#[must_use]
pub fn theme(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "dark mode"
    } else {
        "light mode"
    }
}
