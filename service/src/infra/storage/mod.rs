//! [`Storage`]-related implementations.

pub mod file;
pub mod memory;

use std::io;

use derive_more::{Display, Error as StdError, From};

pub use self::{file::File, memory::Memory};

/// Local key-value storage operation.
pub use common::Dispatch as Storage;

/// Value to be put into a [`Storage`] under the provided key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// Key to store the value under.
    pub key: &'static str,

    /// Stored value.
    pub value: String,
}

impl Entry {
    /// Creates a new [`Entry`] of the provided `key` and `value`.
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`File`] storage error.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),
}
