//! Scripted doubles of the [`Store`] collaborators.

use std::{cell::RefCell, collections::HashMap, fmt, io};

use common::{
    operations::{By, Select, Update},
    pagination,
};
use tokio::sync::oneshot;
use tracerr::Traced;

use crate::{
    domain::{user, User},
    event::{Event, Observer},
    fetch,
    infra::{
        remote::{self, Page},
        storage::{self, Entry},
        Remote, Storage,
    },
    Store,
};

/// Creates a [`User`] with the provided `id` and names.
pub(crate) fn sample_user(id: u32, first_name: &str, last_name: &str) -> User {
    User {
        id: user::Id::new(id).unwrap(),
        email: format!(
            "{}.{}@reqres.in",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
        )
        .into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg").into(),
    }
}

/// Creates a [`pagination::Number`] out of the provided `n`.
pub(crate) fn page_number(n: u32) -> pagination::Number {
    pagination::Number::new(n).unwrap()
}

/// Creates a [`Page`] of `per_page = 6` holding the provided `users`.
pub(crate) fn page(n: u32, total: u32, users: Vec<User>) -> Page {
    Page {
        info: pagination::Info {
            page: page_number(n),
            per_page: 6,
            total,
            total_pages: page_number(total.div_ceil(6).max(1)),
        },
        users,
    }
}

/// [`Remote`] service replying with scripted responses.
///
/// Unscripted requests fail with `404 Not Found`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRemote {
    /// Responses to page requests, by page number.
    pages: HashMap<u32, Result<Page, remote::Error>>,

    /// Responses to user requests, by user ID.
    users: HashMap<u32, Result<User, remote::Error>>,

    /// Gates holding responses until released.
    gates: RefCell<HashMap<(fetch::Kind, u32), oneshot::Receiver<()>>>,
}

impl ScriptedRemote {
    /// Scripts the response to the request of page `n`.
    pub(crate) fn page(
        mut self,
        n: u32,
        response: Result<Page, remote::Error>,
    ) -> Self {
        _ = self.pages.insert(n, response);
        self
    }

    /// Scripts the response to the request of user `id`.
    pub(crate) fn user(
        mut self,
        id: u32,
        response: Result<User, remote::Error>,
    ) -> Self {
        _ = self.users.insert(id, response);
        self
    }

    /// Holds the response to the request of the provided `kind` and `key`
    /// until the returned [`oneshot::Sender`] fires.
    pub(crate) fn hold(
        &self,
        kind: fetch::Kind,
        key: u32,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        _ = self.gates.borrow_mut().insert((kind, key), rx);
        tx
    }

    /// Awaits the gate of the provided `kind` and `key`, if any.
    async fn pass(&self, kind: fetch::Kind, key: u32) {
        let gate = self.gates.borrow_mut().remove(&(kind, key));
        if let Some(gate) = gate {
            _ = gate.await;
        }
    }
}

impl Remote<Select<By<Page, pagination::Number>>> for ScriptedRemote {
    type Ok = Page;
    type Err = Traced<remote::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Page, pagination::Number>>,
    ) -> Result<Self::Ok, Self::Err> {
        let n = by.into_inner().get();
        self.pass(fetch::Kind::Page, n).await;
        self.pages
            .get(&n)
            .cloned()
            .unwrap_or(Err(remote::Error::HttpStatus(404)))
            .map_err(|e| tracerr::new!(e))
    }
}

impl Remote<Select<By<User, user::Id>>> for ScriptedRemote {
    type Ok = User;
    type Err = Traced<remote::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<User, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner().get();
        self.pass(fetch::Kind::Detail, id).await;
        self.users
            .get(&id)
            .cloned()
            .unwrap_or(Err(remote::Error::HttpStatus(404)))
            .map_err(|e| tracerr::new!(e))
    }
}

/// [`Storage`] failing every operation.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrokenStorage;

impl Storage<Select<By<Option<String>, &'static str>>> for BrokenStorage {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    fn dispatch(
        &self,
        _: Select<By<Option<String>, &'static str>>,
    ) -> Result<Self::Ok, Self::Err> {
        Err(tracerr::new!(storage::Error::from(io::Error::other("broken"))))
    }
}

impl Storage<Update<Entry>> for BrokenStorage {
    type Ok = ();
    type Err = Traced<storage::Error>;

    fn dispatch(&self, _: Update<Entry>) -> Result<Self::Ok, Self::Err> {
        Err(tracerr::new!(storage::Error::from(io::Error::other("broken"))))
    }
}

/// [`Observer`] recording every [`Event`].
#[derive(Debug, Default)]
pub(crate) struct Recorder(RefCell<Vec<Event>>);

impl Recorder {
    /// Takes the [`Event`]s recorded so far.
    pub(crate) fn take(&self) -> Vec<Event> {
        self.0.take()
    }
}

impl Observer for Recorder {
    fn observe(&self, event: &Event) {
        self.0.borrow_mut().push(event.clone());
    }
}

/// [`Store`] with scripted collaborators.
pub(crate) type TestStore<S = storage::Memory> =
    Store<ScriptedRemote, S, Recorder>;

/// Creates a new [`TestStore`] with the provided collaborators.
pub(crate) fn store<S>(
    ordering: fetch::Ordering,
    remote: ScriptedRemote,
    storage: S,
) -> TestStore<S>
where
    S: Storage<
        Select<By<Option<String>, &'static str>>,
        Ok = Option<String>,
        Err: fmt::Display,
    >,
{
    Store::new(
        crate::Config { ordering },
        remote,
        storage,
        Recorder::default(),
    )
}
