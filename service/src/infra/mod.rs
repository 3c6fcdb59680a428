//! Infrastructure layer.

pub mod remote;
pub mod storage;

#[cfg(feature = "reqres")]
pub use self::remote::{reqres, Reqres};
pub use self::{remote::Remote, storage::Storage};
