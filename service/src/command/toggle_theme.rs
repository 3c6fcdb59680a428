//! [`Dispatch`]ed command for switching the color [`Theme`].

use std::{convert::Infallible, fmt::Display};

use common::operations::Update;

use crate::{
    domain::Theme,
    event::{Event, Observer},
    infra::{storage::Entry, Storage},
    Store,
};

use super::Dispatch;

/// Switches the color [`Theme`] to the opposite one, writing it through to
/// the [`Storage`].
#[derive(Clone, Copy, Debug)]
pub struct ToggleTheme;

impl<R, S, O> Dispatch<ToggleTheme> for Store<R, S, O>
where
    S: Storage<Update<Entry>, Ok = (), Err: Display>,
    O: Observer,
{
    type Ok = Theme;
    type Err = Infallible;

    fn dispatch(&self, _: ToggleTheme) -> Result<Self::Ok, Self::Err> {
        let theme = self.update(|s| {
            s.theme = s.theme.toggled();
            s.theme
        });
        self.observe(Event::ThemeChanged { theme });
        self.persist(Entry::new(Theme::STORAGE_KEY, theme.to_string()));
        Ok(theme)
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        command::Dispatch as _,
        domain::Theme,
        fetch::Ordering,
        infra::storage::{Entry, Memory},
        mock::{self, ScriptedRemote},
    };

    use super::ToggleTheme;

    #[test]
    fn persists_toggled_theme() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::default(),
        );
        let persisted = || {
            store
                .storage()
                .dispatch(Select(By::new(Theme::STORAGE_KEY)))
                .unwrap()
        };
        assert_eq!(store.snapshot().theme(), Theme::Light);

        assert_eq!(store.dispatch(ToggleTheme), Ok(Theme::Dark));
        assert_eq!(persisted().as_deref(), Some("dark"));

        assert_eq!(store.dispatch(ToggleTheme), Ok(Theme::Light));
        assert_eq!(persisted().as_deref(), Some("light"));
    }

    #[test]
    fn restores_persisted_theme() {
        let store = mock::store(
            Ordering::default(),
            ScriptedRemote::default(),
            Memory::with([Entry::new(Theme::STORAGE_KEY, "dark")]),
        );

        assert_eq!(store.snapshot().theme(), Theme::Dark);
    }
}
