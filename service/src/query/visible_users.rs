//! [`Query`] of the visible [`User`]s.

use std::convert::Infallible;

use crate::{domain::User, State, Store};

use super::Query;

/// Queries the [`User`]s of the current page passing the search and the
/// favorites-only filters of the [`State`], in their original order.
///
/// Recomputed on every execution.
#[derive(Clone, Copy, Debug)]
pub struct VisibleUsers;

impl<R, S, O> Query<VisibleUsers> for Store<R, S, O> {
    type Ok = Vec<User>;
    type Err = Infallible;

    fn dispatch(&self, _: VisibleUsers) -> Result<Self::Ok, Self::Err> {
        Ok(self.read(State::visible_users))
    }
}
