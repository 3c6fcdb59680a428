//! [`Remote`] user service implementations.

#[cfg(feature = "reqres")]
pub mod reqres;

use common::pagination;
use derive_more::{Display, Error as StdError};

use crate::domain::User;

#[cfg(feature = "reqres")]
pub use self::reqres::Reqres;

/// Remote user service operation.
pub use common::Handler as Remote;

/// Page of [`User`]s provided by a [`Remote`] service.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Page {
    /// [`pagination::Info`] of this [`Page`].
    pub info: pagination::Info,

    /// [`User`]s of this [`Page`].
    pub users: Vec<User>,
}

/// [`Remote`] service error.
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Service couldn't be reached.
    #[display("transport failure: {_0}")]
    Transport(#[error(not(source))] String),

    /// Service responded with a non-success status.
    #[display("HTTP error! status: {_0}")]
    HttpStatus(#[error(not(source))] u16),

    /// Service response doesn't match the expected shape.
    #[display("invalid response structure: {_0}")]
    Schema(#[error(not(source))] String),
}
