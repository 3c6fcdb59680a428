//! [`Dispatch`]ed command for dismissing an error.

use std::convert::Infallible;

use crate::{
    event::{Event, Observer},
    Store,
};

use super::Dispatch;

/// Dismisses the error of the last failed fetch.
#[derive(Clone, Copy, Debug)]
pub struct ClearError;

impl<R, S, O: Observer> Dispatch<ClearError> for Store<R, S, O> {
    type Ok = ();
    type Err = Infallible;

    fn dispatch(&self, _: ClearError) -> Result<Self::Ok, Self::Err> {
        if self.update(|s| s.error.take()).is_some() {
            self.observe(Event::ErrorCleared);
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, Dispatch as _, RequestPage},
        fetch::Ordering,
        infra::storage::Memory,
        mock::{self, page_number, ScriptedRemote},
    };

    use super::ClearError;

    #[tokio::test]
    async fn dismisses_fetch_error() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::default(),
        );
        _ = store.execute(RequestPage(page_number(1))).await;
        assert_eq!(
            store.snapshot().error(),
            Some("Failed to fetch users: HTTP error! status: 404"),
        );

        store.dispatch(ClearError).unwrap();

        assert_eq!(store.snapshot().error(), None);
    }
}
