//! Domain definitions.

pub mod favorites;
pub mod theme;
pub mod user;

pub use self::{favorites::Favorites, theme::Theme, user::User};
