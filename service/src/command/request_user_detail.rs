//! [`Command`] for requesting details of a [`User`].

use std::convert::Infallible;

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::State;
use crate::{
    command::Settled,
    domain::{user, User},
    event::{Event, Observer},
    fetch,
    infra::{remote, Remote},
    Store,
};

use super::Command;

/// [`Command`] for requesting details of a [`User`] from the [`Remote`]
/// service.
///
/// On success, the [`User`] becomes the selected one in the [`State`].
/// On failure, records the error and clears the selection.
#[derive(Clone, Copy, Debug)]
pub struct RequestUserDetail(pub user::Id);

impl<R, S, O> Command<RequestUserDetail> for Store<R, S, O>
where
    R: Remote<
        Select<By<User, user::Id>>,
        Ok = User,
        Err = Traced<remote::Error>,
    >,
    O: Observer,
{
    type Ok = Settled;
    type Err = Infallible;

    async fn execute(
        &self,
        RequestUserDetail(id): RequestUserDetail,
    ) -> Result<Self::Ok, Self::Err> {
        let ticket = self.begin(fetch::Kind::Detail);
        self.observe(Event::UserRequested { id });

        let res = self.remote().execute(Select(By::new(id))).await;

        if !self.settle(ticket) {
            return Ok(Settled::Discarded);
        }
        Ok(match res {
            Ok(user) => {
                self.update(|s| {
                    s.selected_user = Some(user);
                    s.error = None;
                });
                self.observe(Event::UserLoaded { id });
                Settled::Succeeded
            }
            Err(e) => {
                let e: &remote::Error = e.as_ref();
                self.update(|s| {
                    s.selected_user = None;
                    s.error = Some(format!("Failed to fetch user: {e}"));
                });
                self.observe(Event::UserFailed {
                    id,
                    error: e.to_string(),
                });
                Settled::Failed
            }
        })
    }
}
