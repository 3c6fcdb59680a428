//! [`Handler`] and [`Dispatch`] abstractions.

use std::future::Future;

/// Executable handler.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

/// Handler completing immediately, without suspension points.
///
/// Counterpart of the [`Handler`] for operations which must be observable
/// right after the call returns (local state mutations, synchronous storage
/// writes).
pub trait Dispatch<Args = ()> {
    /// Type of successful [`Dispatch`] result.
    type Ok;

    /// Type of this [`Dispatch`] error.
    type Err;

    /// Dispatches the provided arguments to this [`Dispatch`].
    ///
    /// # Errors
    ///
    /// Implementation-specific.
    fn dispatch(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
