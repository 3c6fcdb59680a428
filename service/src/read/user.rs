//! [`User`] read model definition.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s list definitions.

    use crate::domain::{Favorites, User};

    /// Filter deriving the visible [`User`]s from a page of them.
    #[derive(Clone, Copy, Debug)]
    pub struct Filter<'a> {
        /// Text to search for in [`User`]'s names and email, ignoring case.
        ///
        /// Empty text matches every [`User`].
        pub search: &'a str,

        /// [`Favorites`] to restrict the [`User`]s to, if any.
        pub favorites: Option<&'a Favorites>,
    }

    impl Filter<'_> {
        /// Indicates whether the provided [`User`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, user: &User) -> bool {
            self.matches_search(user)
                && self.favorites.map_or(true, |f| f.contains(user.id))
        }

        /// Returns the [`User`]s passing this [`Filter`], preserving their
        /// order.
        pub fn apply<'u>(
            &self,
            users: impl IntoIterator<Item = &'u User>,
        ) -> Vec<User> {
            users
                .into_iter()
                .filter(|u| self.matches(u))
                .cloned()
                .collect()
        }

        /// Indicates whether the provided [`User`] matches the search text.
        fn matches_search(&self, user: &User) -> bool {
            if self.search.is_empty() {
                return true;
            }
            let needle = self.search.to_lowercase();
            let fields: [&str; 3] = [
                user.first_name.as_ref(),
                user.last_name.as_ref(),
                user.email.as_ref(),
            ];
            fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }
    }

}
