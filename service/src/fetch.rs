//! Bookkeeping of outstanding remote fetches.

use derive_more::Display;
use serde::Deserialize;

#[cfg(doc)]
use crate::state::State;

/// Resolution of overlapping fetches of the same [`Kind`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ordering {
    /// Whichever fetch settles last overwrites the [`State`], even if it was
    /// issued earlier than the others.
    ///
    /// Any settlement ends the loading.
    LastSettled,

    /// Only the most recently issued fetch of its [`Kind`] is applied to the
    /// [`State`], while older ones are discarded once settled.
    ///
    /// Loading lasts until the most recent fetches settle.
    #[default]
    LatestIssued,
}

/// Kind of a remote fetch.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Fetch of a users page.
    #[display("page")]
    Page,

    /// Fetch of a single user details.
    #[display("user details")]
    Detail,
}

/// Ticket of an issued fetch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticket {
    /// [`Kind`] of the fetch.
    pub(crate) kind: Kind,

    /// Sequence number of the fetch among the ones of the same [`Kind`].
    seq: u64,
}

/// Tracker of outstanding fetches.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Tracker {
    /// Fetches of [`Kind::Page`].
    page: Counter,

    /// Fetches of [`Kind::Detail`].
    detail: Counter,
}

/// Fetches of a single [`Kind`].
#[derive(Clone, Copy, Debug, Default)]
struct Counter {
    /// Sequence number of the last issued fetch.
    issued: u64,

    /// Indicator whether a fetch is awaited.
    pending: bool,
}

impl Tracker {
    /// Registers a new fetch of the provided [`Kind`].
    pub(crate) fn issue(&mut self, kind: Kind) -> Ticket {
        let counter = self.counter(kind);
        counter.issued += 1;
        counter.pending = true;
        Ticket {
            kind,
            seq: counter.issued,
        }
    }

    /// Registers a settlement of the fetch with the provided [`Ticket`].
    ///
    /// Returns whether its outcome should be applied.
    pub(crate) fn settle(
        &mut self,
        ticket: Ticket,
        ordering: Ordering,
    ) -> bool {
        match ordering {
            Ordering::LastSettled => {
                self.page.pending = false;
                self.detail.pending = false;
                true
            }
            Ordering::LatestIssued => {
                let counter = self.counter(ticket.kind);
                if counter.issued != ticket.seq {
                    return false;
                }
                counter.pending = false;
                true
            }
        }
    }

    /// Indicates whether any fetch is awaited.
    pub(crate) fn is_loading(&self) -> bool {
        self.page.pending || self.detail.pending
    }

    /// Returns the [`Counter`] of the provided [`Kind`].
    fn counter(&mut self, kind: Kind) -> &mut Counter {
        match kind {
            Kind::Page => &mut self.page,
            Kind::Detail => &mut self.detail,
        }
    }
}
