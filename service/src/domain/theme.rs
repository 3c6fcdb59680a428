//! [`Theme`] definitions.

use strum::{Display, EnumString};

/// Color theme preference.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark color scheme.
    Dark,

    /// Light color scheme.
    #[default]
    Light,
}

impl Theme {
    /// Storage key the [`Theme`] is persisted under.
    pub const STORAGE_KEY: &'static str = "theme";

    /// Restores a [`Theme`] from its persisted representation.
    ///
    /// Anything except `dark` falls back to [`Theme::Light`].
    #[must_use]
    pub fn restore(stored: Option<&str>) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Returns the opposite [`Theme`].
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Indicates whether this is the [`Theme::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
