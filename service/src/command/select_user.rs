//! [`Dispatch`]ed command for selecting a [`User`].

use std::convert::Infallible;

use crate::{
    domain::User,
    event::{Event, Observer},
    Store,
};

use super::Dispatch;

/// Selects the provided [`User`], or clears the selection if [`None`].
///
/// Neither hits the remote service, nor affects the loading and error state.
#[derive(Clone, Debug)]
pub struct SelectUser(pub Option<User>);

impl<R, S, O: Observer> Dispatch<SelectUser> for Store<R, S, O> {
    type Ok = ();
    type Err = Infallible;

    fn dispatch(
        &self,
        SelectUser(user): SelectUser,
    ) -> Result<Self::Ok, Self::Err> {
        let event = user.as_ref().map_or(Event::SelectionCleared, |u| {
            Event::UserSelected { id: u.id }
        });
        self.update(|s| s.selected_user = user);
        self.observe(event);
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Dispatch as _,
        event::Event,
        fetch::Ordering,
        infra::storage::Memory,
        mock::{self, sample_user, ScriptedRemote},
    };

    use super::SelectUser;

    #[test]
    fn selects_and_clears() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::default(),
        );
        let emma = sample_user(3, "Emma", "Wong");

        store.dispatch(SelectUser(Some(emma.clone()))).unwrap();
        assert_eq!(store.snapshot().selected_user(), Some(&emma));
        assert!(!store.snapshot().is_loading());

        store.dispatch(SelectUser(None)).unwrap();
        assert_eq!(store.snapshot().selected_user(), None);

        assert_eq!(
            store.observer().take(),
            [Event::UserSelected { id: emma.id }, Event::SelectionCleared],
        );
    }
}
