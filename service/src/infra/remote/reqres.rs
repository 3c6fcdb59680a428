//! [ReqRes]-compatible [`Remote`] user service.
//!
//! [ReqRes]: https://reqres.in

use std::time;

use common::{
    operations::{By, Select},
    pagination,
};
use derive_more::{Display, Error as StdError, From};
use reqwest::header;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{de::DeserializeOwned, Deserialize};
use tracerr::Traced;
use tracing as log;
use url::Url;

use crate::{
    domain::{user, User},
    infra::remote::{self, Page, Remote},
};

/// [`Reqres`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the API, the `users` resource is resolved against.
    pub base_url: Url,

    /// Static API key to authenticate requests with, if any.
    pub api_key: Option<SecretString>,

    /// Timeout of a single request.
    pub timeout: time::Duration,
}

/// HTTP client of a [ReqRes]-compatible user API.
///
/// [ReqRes]: https://reqres.in
#[derive(Clone, Debug)]
pub struct Reqres {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL of the API.
    base_url: Url,

    /// API key sent along with every request.
    api_key: Option<SecretString>,
}

impl Reqres {
    /// Creates a new [`Reqres`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the base URL cannot have path segments, or the HTTP client fails to
    /// build.
    pub fn new(config: Config) -> Result<Self, Traced<BuildError>> {
        let Config {
            base_url,
            api_key,
            timeout,
        } = config;

        if base_url.cannot_be_a_base() {
            return Err(tracerr::new!(BuildError::BaseUrl(base_url)));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> BuildError))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Resolves the provided path `segments` against the base URL.
    fn endpoint<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Url {
        let mut url = self.base_url.clone();
        // Checked on construction.
        if let Ok(mut path) = url.path_segments_mut() {
            _ = path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Performs a `GET` request to the provided `url`, decoding its JSON
    /// response.
    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, Traced<remote::Error>> {
        use remote::Error as E;

        log::debug!("GET {url}");

        let mut req = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(key) = &self.api_key {
            req = req
                .bearer_auth(key.expose_secret())
                .header("X-API-Key", key.expose_secret());
        }

        let resp = req
            .send()
            .await
            .map_err(|e| tracerr::new!(E::Transport(e.to_string())))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::new!(E::HttpStatus(status.as_u16())));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| tracerr::new!(E::Transport(e.to_string())))?;
        serde_json::from_slice(&body)
            .map_err(|e| tracerr::new!(E::Schema(e.to_string())))
    }
}

impl Remote<Select<By<Page, pagination::Number>>> for Reqres {
    type Ok = Page;
    type Err = Traced<remote::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Page, pagination::Number>>,
    ) -> Result<Self::Ok, Self::Err> {
        let page = by.into_inner();

        let mut url = self.endpoint(["users"]);
        _ = url.query_pairs_mut().append_pair("page", &page.to_string());

        self.get::<PageResponse>(url)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Remote<Select<By<User, user::Id>>> for Reqres {
    type Ok = User;
    type Err = Traced<remote::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<User, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        use remote::Error as E;

        let id = by.into_inner();

        let UserResponse { data } = self
            .get(self.endpoint(["users", &id.to_string()]))
            .await
            .map_err(tracerr::wrap!())?;

        match data {
            Some(serde_json::Value::Object(obj)) if !obj.is_empty() => {
                serde_json::from_value(serde_json::Value::Object(obj))
                    .map_err(|e| tracerr::new!(E::Schema(e.to_string())))
            }
            Some(_) | None => Err(tracerr::new!(E::Schema(format!(
                "`User(id: {id})` not found",
            )))),
        }
    }
}

/// Response to a page of [`User`]s request.
#[derive(Debug, Deserialize)]
struct PageResponse {
    /// Number of the returned page.
    #[serde(default)]
    page: u32,

    /// Maximum number of [`User`]s per page.
    #[serde(default)]
    per_page: u32,

    /// Total number of [`User`]s.
    #[serde(default)]
    total: u32,

    /// Total number of pages.
    #[serde(default)]
    total_pages: u32,

    /// [`User`]s of the page.
    data: Vec<User>,
}

impl From<PageResponse> for Page {
    fn from(resp: PageResponse) -> Self {
        let PageResponse {
            page,
            per_page,
            total,
            total_pages,
            data,
        } = resp;

        Self {
            info: pagination::Info {
                page: pagination::Number::new(page).unwrap_or_default(),
                per_page,
                total,
                total_pages: pagination::Number::new(total_pages)
                    .unwrap_or_default(),
            },
            users: data,
        }
    }
}

/// Response to a single [`User`] request.
#[derive(Debug, Deserialize)]
struct UserResponse {
    /// Requested [`User`], if found.
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Error of building a [`Reqres`] client.
#[derive(Debug, Display, From, StdError)]
pub enum BuildError {
    /// Base URL cannot have path segments.
    #[display("`{_0}` cannot be used as a base URL")]
    #[from(ignore)]
    BaseUrl(#[error(not(source))] Url),

    /// HTTP client failed to build.
    #[display("Failed to build HTTP client: {_0}")]
    Client(reqwest::Error),
}
