//! Abstractions for page-number pagination.

use std::{num::NonZeroU32, ops::RangeInclusive};

use derive_more::{Display, FromStr, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of a page, starting from `1`.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Number(NonZeroU32);

impl Number {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a new [`Number`] if the given `number` is positive.
    #[must_use]
    pub const fn new(number: u32) -> Option<Self> {
        match NonZeroU32::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the raw value of this [`Number`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the [`Number`] of the page following this one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Returns the [`Number`] of the page preceding this one.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Information about a page returned by a paginated source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Info {
    /// [`Number`] of the page.
    pub page: Number,

    /// Maximum number of items per page.
    pub per_page: u32,

    /// Total number of items across all pages.
    pub total: u32,

    /// Total number of pages.
    pub total_pages: Number,
}

impl Info {
    /// Indicates whether a page precedes the described one.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page > Number::FIRST
    }

    /// Indicates whether a page follows the described one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns the [`Window`] of at most `width` page numbers to display
    /// around the described page.
    #[must_use]
    pub fn window(&self, width: NonZeroU32) -> Window {
        Window::new(self.page, self.total_pages, width)
    }

    /// Returns the 1-based range of items shown on the described page.
    ///
    /// [`None`] is returned if the page holds no items.
    #[must_use]
    pub fn items(&self) -> Option<RangeInclusive<u32>> {
        let offset = (self.page.get() - 1).checked_mul(self.per_page)?;
        let first = offset.checked_add(1)?;
        let last = offset.saturating_add(self.per_page).min(self.total);
        (self.per_page > 0 && first <= last).then_some(first..=last)
    }
}

/// Range of consecutive page numbers to display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    /// First displayed page.
    pub start: Number,

    /// Last displayed page.
    pub end: Number,

    /// Total number of pages.
    pub total: Number,
}

impl Window {
    /// Creates a new [`Window`] of at most `width` pages, keeping the
    /// `current` page centered where possible.
    #[must_use]
    pub fn new(current: Number, total: Number, width: NonZeroU32) -> Self {
        if total.get() <= width.get() {
            return Self {
                start: Number::FIRST,
                end: total,
                total,
            };
        }

        let (last, width) = (total.get(), width.get());
        let start = current
            .get()
            .saturating_sub(width / 2)
            .clamp(1, last - width + 1);
        Self {
            start: Number::new(start).unwrap_or(Number::FIRST),
            end: Number::new(start + width - 1).unwrap_or(total),
            total,
        }
    }

    /// Returns an iterator over the displayed page [`Number`]s.
    pub fn pages(&self) -> impl Iterator<Item = Number> {
        (self.start.get()..=self.end.get()).filter_map(Number::new)
    }

    /// Indicates whether the first page lies outside of this [`Window`].
    #[must_use]
    pub fn detached_first(&self) -> bool {
        self.start > Number::FIRST
    }

    /// Indicates whether pages are omitted between the first page and this
    /// [`Window`].
    #[must_use]
    pub fn leading_gap(&self) -> bool {
        self.start.get() > 2
    }

    /// Indicates whether the last page lies outside of this [`Window`].
    #[must_use]
    pub fn detached_last(&self) -> bool {
        self.end < self.total
    }

    /// Indicates whether pages are omitted between this [`Window`] and the
    /// last page.
    #[must_use]
    pub fn trailing_gap(&self) -> bool {
        self.end.get() + 1 < self.total.get()
    }
}
