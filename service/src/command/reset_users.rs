//! [`Dispatch`]ed command for resetting the users data.

use std::convert::Infallible;

use common::pagination;

#[cfg(doc)]
use crate::{
    domain::{Favorites, Theme},
    State,
};
use crate::{
    event::{Event, Observer},
    Store,
};

use super::Dispatch;

/// Resets the users data of the [`State`] to its initial values.
///
/// [`Favorites`] and [`Theme`] are preserved.
#[derive(Clone, Copy, Debug)]
pub struct ResetUsers;

impl<R, S, O: Observer> Dispatch<ResetUsers> for Store<R, S, O> {
    type Ok = ();
    type Err = Infallible;

    fn dispatch(&self, _: ResetUsers) -> Result<Self::Ok, Self::Err> {
        self.update(|s| {
            s.users.clear();
            s.selected_user = None;
            s.error = None;
            s.search_term.clear();
            s.page = pagination::Info::default();
        });
        self.observe(Event::UsersReset);
        Ok(())
    }
}
