//! [`Query`] definition.

pub mod visible_users;

/// [`Query`] of the [`Store`] [`State`].
///
/// [`State`]: crate::State
/// [`Store`]: crate::Store
pub use common::Dispatch as Query;

pub use self::visible_users::VisibleUsers;
