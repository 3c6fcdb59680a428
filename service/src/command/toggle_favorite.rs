//! [`Dispatch`]ed command for toggling a favorite [`User`].

use std::{convert::Infallible, fmt::Display};

use common::operations::Update;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    domain::{favorites::Toggled, user, Favorites},
    event::{Event, Observer},
    infra::{storage::Entry, Storage},
    Store,
};

use super::Dispatch;

/// Adds the [`User`] with the provided [`user::Id`] to the [`Favorites`], or
/// removes it if it's there already.
///
/// The whole [`Favorites`] are written through to the [`Storage`].
#[derive(Clone, Copy, Debug)]
pub struct ToggleFavorite(pub user::Id);

impl<R, S, O> Dispatch<ToggleFavorite> for Store<R, S, O>
where
    S: Storage<Update<Entry>, Ok = (), Err: Display>,
    O: Observer,
{
    type Ok = Toggled;
    type Err = Infallible;

    fn dispatch(
        &self,
        ToggleFavorite(id): ToggleFavorite,
    ) -> Result<Self::Ok, Self::Err> {
        let (toggled, json) = self.update(|s| {
            let toggled = s.favorites.toggle(id);
            (toggled, s.favorites.to_json())
        });
        self.observe(Event::FavoriteToggled { id, toggled });
        self.persist(Entry::new(Favorites::STORAGE_KEY, json));
        Ok(toggled)
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        command::Dispatch as _,
        domain::{favorites::Toggled, user, Favorites},
        event::Event,
        fetch::Ordering,
        infra::storage::{Entry, Memory},
        mock::{self, BrokenStorage, ScriptedRemote},
    };

    use super::ToggleFavorite;

    fn id(v: u32) -> user::Id {
        user::Id::new(v).unwrap()
    }

    #[test]
    fn toggles_with_write_through() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::default(),
        );
        let persisted = || {
            store
                .storage()
                .dispatch(Select(By::new(Favorites::STORAGE_KEY)))
                .unwrap()
        };

        assert_eq!(store.dispatch(ToggleFavorite(id(1))), Ok(Toggled::Added));
        assert!(store.snapshot().favorites().contains(id(1)));
        assert_eq!(persisted().as_deref(), Some("[1]"));

        assert_eq!(
            store.dispatch(ToggleFavorite(id(1))),
            Ok(Toggled::Removed),
        );
        assert!(store.snapshot().favorites().is_empty());
        assert_eq!(persisted().as_deref(), Some("[]"));
    }

    #[test]
    fn preserves_insertion_order() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::with([Entry::new(Favorites::STORAGE_KEY, "[4]")]),
        );

        _ = store.dispatch(ToggleFavorite(id(9)));
        _ = store.dispatch(ToggleFavorite(id(2)));

        assert_eq!(
            store.snapshot().favorites().iter().collect::<Vec<_>>(),
            [id(4), id(9), id(2)],
        );
        assert_eq!(
            store
                .storage()
                .dispatch(Select(By::new(Favorites::STORAGE_KEY)))
                .unwrap()
                .as_deref(),
            Some("[4,9,2]"),
        );
    }

    #[test]
    fn swallows_persistence_failure() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            BrokenStorage,
        );
        _ = store.observer().take();

        assert_eq!(store.dispatch(ToggleFavorite(id(5))), Ok(Toggled::Added));

        let state = store.snapshot();
        assert!(state.favorites().contains(id(5)));
        assert_eq!(state.error(), None);
        assert!(matches!(
            store.observer().take().as_slice(),
            [
                Event::FavoriteToggled { .. },
                Event::PersistenceFailed {
                    key: Favorites::STORAGE_KEY,
                    ..
                },
            ],
        ));
    }
}
