//! [`Dispatch`]ed command for switching the favorites-only view.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Favorites;
use crate::{
    event::{Event, Observer},
    Store,
};

use super::Dispatch;

/// Switches whether only [`Favorites`] are visible.
#[derive(Clone, Copy, Debug)]
pub struct SetShowFavoritesOnly(pub bool);

impl<R, S, O: Observer> Dispatch<SetShowFavoritesOnly> for Store<R, S, O> {
    type Ok = ();
    type Err = Infallible;

    fn dispatch(
        &self,
        SetShowFavoritesOnly(enabled): SetShowFavoritesOnly,
    ) -> Result<Self::Ok, Self::Err> {
        self.update(|s| s.show_favorites_only = enabled);
        self.observe(Event::FavoritesOnlyChanged { enabled });
        Ok(())
    }
}
