//! Service contains the user directory state and its synchronization with
//! the remote user API and the local storage.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod event;
pub mod fetch;
pub mod infra;
#[cfg(test)]
mod mock;
pub mod query;
pub mod read;
pub mod state;

use std::{cell::RefCell, fmt::Display};

use common::operations::{By, Select, Update};
use serde::Deserialize;
use tracing as log;

#[cfg(doc)]
use infra::Remote;

use crate::{
    domain::{Favorites, Theme},
    event::{Event, Observer},
    infra::{storage::Entry, Storage},
};

pub use self::{command::Command, query::Query, state::State};

/// [`Store`] configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Config {
    /// Resolution of overlapping fetches.
    #[serde(default)]
    pub ordering: fetch::Ordering,
}

/// User directory store.
///
/// The only owner of the [`State`], which is mutated by [`Command`]s and read
/// through [`Query`]s or a [`Store::snapshot()`].
///
/// Designed for a single-threaded cooperative execution: the [`State`] is
/// never borrowed across an `.await`, so synchronous [`Command`]s issued while
/// a fetch is outstanding apply immediately.
#[derive(Debug)]
pub struct Store<R, S, O = event::Log> {
    /// Configuration of this [`Store`].
    config: Config,

    /// [`Remote`] user service of this [`Store`].
    remote: R,

    /// [`Storage`] of this [`Store`].
    storage: S,

    /// [`Observer`] of this [`Store`] [`Event`]s.
    observer: O,

    /// Current [`State`].
    state: RefCell<State>,

    /// Outstanding remote fetches.
    fetches: RefCell<fetch::Tracker>,
}

impl<R, S, O> Store<R, S, O>
where
    S: Storage<
        Select<By<Option<String>, &'static str>>,
        Ok = Option<String>,
        Err: Display,
    >,
    O: Observer,
{
    /// Creates a new [`Store`] with the provided parameters, restoring the
    /// [`Favorites`] and the [`Theme`] from the [`Storage`].
    ///
    /// Unreadable or malformed persisted values fall back to defaults.
    pub fn new(config: Config, remote: R, storage: S, observer: O) -> Self {
        let this = Self {
            config,
            remote,
            storage,
            observer,
            state: RefCell::default(),
            fetches: RefCell::default(),
        };

        let favorites = this
            .load(Favorites::STORAGE_KEY)
            .and_then(|json| {
                Favorites::from_json(&json)
                    .inspect_err(|e| {
                        log::warn!(
                            "malformed `{}`: {e}",
                            Favorites::STORAGE_KEY,
                        );
                    })
                    .ok()
            })
            .unwrap_or_default();
        let theme = Theme::restore(this.load(Theme::STORAGE_KEY).as_deref());
        this.update(|s| {
            s.favorites = favorites;
            s.theme = theme;
        });

        this
    }

    /// Reads the value stored under the provided `key`.
    ///
    /// Failures are reported to the [`Observer`].
    fn load(&self, key: &'static str) -> Option<String> {
        self.storage
            .dispatch(Select(By::new(key)))
            .inspect_err(|e| {
                self.observe(Event::PersistenceFailed {
                    key,
                    error: e.to_string(),
                });
            })
            .ok()
            .flatten()
    }
}

impl<R, S, O> Store<R, S, O> {
    /// Returns [`Config`] of this [`Store`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Remote`] user service of this [`Store`].
    #[must_use]
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Returns [`Storage`] of this [`Store`].
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns [`Observer`] of this [`Store`].
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns a read-only copy of the current [`State`].
    #[must_use]
    pub fn snapshot(&self) -> State {
        self.state.borrow().clone()
    }

    /// Applies the provided mutation to the [`State`].
    pub(crate) fn update<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        f(&mut self.state.borrow_mut())
    }

    /// Reads the [`State`] with the provided function.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&State) -> T) -> T {
        f(&self.state.borrow())
    }
}

impl<R, S, O: Observer> Store<R, S, O> {
    /// Notifies the [`Observer`] about the provided [`Event`].
    ///
    /// Must not be called while the [`State`] is borrowed.
    pub(crate) fn observe(&self, event: Event) {
        self.observer.observe(&event);
    }

    /// Registers a new fetch of the provided [`fetch::Kind`], entering the
    /// loading [`State`].
    pub(crate) fn begin(&self, kind: fetch::Kind) -> fetch::Ticket {
        let ticket = self.fetches.borrow_mut().issue(kind);
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
        ticket
    }

    /// Registers a settlement of the fetch with the provided
    /// [`fetch::Ticket`], leaving the loading [`State`] if nothing else is
    /// awaited.
    ///
    /// Returns whether the outcome of the fetch should be applied.
    pub(crate) fn settle(&self, ticket: fetch::Ticket) -> bool {
        let (apply, loading) = {
            let mut fetches = self.fetches.borrow_mut();
            let apply = fetches.settle(ticket, self.config.ordering);
            (apply, fetches.is_loading())
        };
        self.update(|s| s.loading = loading);
        if !apply {
            self.observe(Event::ResponseDiscarded { kind: ticket.kind });
        }
        apply
    }
}

impl<R, S, O> Store<R, S, O>
where
    S: Storage<Update<Entry>, Ok = (), Err: Display>,
    O: Observer,
{
    /// Writes the provided [`Entry`] through to the [`Storage`].
    ///
    /// Failures are reported to the [`Observer`] only.
    pub(crate) fn persist(&self, entry: Entry) {
        let key = entry.key;
        if let Err(e) = self.storage.dispatch(Update(entry)) {
            self.observe(Event::PersistenceFailed {
                key,
                error: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{user, Favorites, Theme},
        event::Event,
        fetch::Ordering,
        infra::storage::{Entry, Memory},
        mock::{self, BrokenStorage, ScriptedRemote},
    };

    #[test]
    fn starts_empty() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::default(),
        );

        let state = store.snapshot();
        assert!(state.users().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.current_page().get(), 1);
        assert_eq!(state.total_pages().get(), 1);
        assert!(state.favorites().is_empty());
        assert_eq!(state.theme(), Theme::Light);
        assert!(store.observer().take().is_empty());
    }

    #[test]
    fn restores_persisted_preferences() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::with([
                Entry::new(Favorites::STORAGE_KEY, "[3,1,3]"),
                Entry::new(Theme::STORAGE_KEY, "dark"),
            ]),
        );

        let state = store.snapshot();
        assert_eq!(
            state.favorites().iter().map(user::Id::get).collect::<Vec<_>>(),
            [3, 1],
        );
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn falls_back_on_malformed_preferences() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::with([
                Entry::new(Favorites::STORAGE_KEY, "{not json"),
                Entry::new(Theme::STORAGE_KEY, "DARK"),
            ]),
        );

        let state = store.snapshot();
        assert!(state.favorites().is_empty());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn reports_unreadable_storage() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            BrokenStorage,
        );

        let state = store.snapshot();
        assert!(state.favorites().is_empty());
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.error(), None);
        assert!(matches!(
            store.observer().take().as_slice(),
            [
                Event::PersistenceFailed {
                    key: Favorites::STORAGE_KEY,
                    ..
                },
                Event::PersistenceFailed {
                    key: Theme::STORAGE_KEY,
                    ..
                },
            ],
        ));
    }
}
