//! [`Dispatch`]ed command for setting the search text.

use std::convert::Infallible;

use crate::{
    event::{Event, Observer},
    Store,
};

use super::Dispatch;

/// Sets the text to search the current page users by.
///
/// The text is stored verbatim: it's neither trimmed, nor case-folded.
#[derive(Clone, Debug)]
pub struct SetSearchTerm(pub String);

impl<R, S, O: Observer> Dispatch<SetSearchTerm> for Store<R, S, O> {
    type Ok = ();
    type Err = Infallible;

    fn dispatch(
        &self,
        SetSearchTerm(term): SetSearchTerm,
    ) -> Result<Self::Ok, Self::Err> {
        self.update(|s| s.search_term.clone_from(&term));
        self.observe(Event::SearchTermChanged { term });
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Dispatch as _,
        fetch::Ordering,
        infra::storage::Memory,
        mock::{self, ScriptedRemote},
    };

    use super::SetSearchTerm;

    #[test]
    fn stores_term_verbatim() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::default(),
        );

        store.dispatch(SetSearchTerm("  JaNet ".into())).unwrap();

        assert_eq!(store.snapshot().search_term(), "  JaNet ");
    }
}
