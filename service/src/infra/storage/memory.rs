//! In-memory [`Storage`].

use std::{cell::RefCell, collections::HashMap, convert::Infallible};

use common::operations::{By, Select, Update};

use crate::infra::{storage::Entry, Storage};

/// [`Storage`] keeping values in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Memory(RefCell<HashMap<String, String>>);

impl Memory {
    /// Creates a new [`Memory`] storage pre-filled with the provided
    /// [`Entry`]s.
    #[must_use]
    pub fn with(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self(RefCell::new(
            entries
                .into_iter()
                .map(|e| (e.key.to_owned(), e.value))
                .collect(),
        ))
    }
}

impl Storage<Select<By<Option<String>, &'static str>>> for Memory {
    type Ok = Option<String>;
    type Err = Infallible;

    fn dispatch(
        &self,
        Select(by): Select<By<Option<String>, &'static str>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.borrow().get(by.into_inner()).cloned())
    }
}

impl Storage<Update<Entry>> for Memory {
    type Ok = ();
    type Err = Infallible;

    fn dispatch(
        &self,
        Update(entry): Update<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = self.0.borrow_mut().insert(entry.key.to_owned(), entry.value);
        Ok(())
    }
}
