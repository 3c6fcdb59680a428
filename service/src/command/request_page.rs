//! [`Command`] for requesting a page of [`User`]s.

use std::convert::Infallible;

use common::{
    operations::{By, Select},
    pagination,
};
use tracerr::Traced;

#[cfg(doc)]
use crate::{domain::User, State};
use crate::{
    command::Settled,
    event::{Event, Observer},
    fetch,
    infra::{
        remote::{self, Page},
        Remote,
    },
    Store,
};

use super::Command;

/// [`Command`] for requesting a page of [`User`]s from the [`Remote`]
/// service.
///
/// On success, replaces the [`User`]s and the pagination of the [`State`].
/// On failure, records the error and clears the [`User`]s, keeping the
/// pagination untouched.
#[derive(Clone, Copy, Debug)]
pub struct RequestPage(pub pagination::Number);

impl<R, S, O> Command<RequestPage> for Store<R, S, O>
where
    R: Remote<
        Select<By<Page, pagination::Number>>,
        Ok = Page,
        Err = Traced<remote::Error>,
    >,
    O: Observer,
{
    type Ok = Settled;
    type Err = Infallible;

    async fn execute(
        &self,
        RequestPage(page): RequestPage,
    ) -> Result<Self::Ok, Self::Err> {
        let ticket = self.begin(fetch::Kind::Page);
        self.observe(Event::PageRequested { page });

        let res = self.remote().execute(Select(By::new(page))).await;

        if !self.settle(ticket) {
            return Ok(Settled::Discarded);
        }
        Ok(match res {
            Ok(Page { info, users }) => {
                let count = users.len();
                self.update(|s| {
                    s.users = users;
                    s.page = info;
                    s.error = None;
                });
                self.observe(Event::PageLoaded {
                    page: info.page,
                    count,
                });
                Settled::Succeeded
            }
            Err(e) => {
                let e: &remote::Error = e.as_ref();
                self.update(|s| {
                    s.users.clear();
                    s.error = Some(format!("Failed to fetch users: {e}"));
                });
                self.observe(Event::PageFailed {
                    page,
                    error: e.to_string(),
                });
                Settled::Failed
            }
        })
    }
}
