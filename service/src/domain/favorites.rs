//! [`Favorites`] definitions.

use derive_more::Display;

use crate::domain::user;
#[cfg(doc)]
use crate::domain::User;

/// Set of favorite [`User`] IDs.
///
/// IDs are unique, and kept in insertion order for display purposes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Favorites(Vec<user::Id>);

impl Favorites {
    /// Storage key the [`Favorites`] are persisted under.
    pub const STORAGE_KEY: &'static str = "userFavorites";

    /// Parses [`Favorites`] from their persisted JSON representation.
    ///
    /// Duplicate IDs are dropped.
    ///
    /// # Errors
    ///
    /// If the `json` is not a sequence of positive integers.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<user::Id>>(json).map(Self::from_iter)
    }

    /// Returns the persisted JSON representation of these [`Favorites`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).expect("infallible")
    }

    /// Indicates whether the provided [`user::Id`] is a favorite one.
    #[must_use]
    pub fn contains(&self, id: user::Id) -> bool {
        self.0.contains(&id)
    }

    /// Removes the provided [`user::Id`] if it's present, or adds it
    /// otherwise.
    pub fn toggle(&mut self, id: user::Id) -> Toggled {
        if let Some(pos) = self.0.iter().position(|f| *f == id) {
            _ = self.0.remove(pos);
            Toggled::Removed
        } else {
            self.0.push(id);
            Toggled::Added
        }
    }

    /// Returns an iterator over the favorite [`user::Id`]s in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = user::Id> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of favorite [`user::Id`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether there are no favorite [`user::Id`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<user::Id> for Favorites {
    fn from_iter<I: IntoIterator<Item = user::Id>>(iter: I) -> Self {
        let mut ids = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self(ids)
    }
}

/// Outcome of [`Favorites::toggle()`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Toggled {
    /// ID was added to the [`Favorites`].
    #[display("added")]
    Added,

    /// ID was removed from the [`Favorites`].
    #[display("removed")]
    Removed,
}
