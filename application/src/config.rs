//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::Debug;
use secrecy::SecretString;
use serde::Deserialize;
use service::{fetch, infra::reqres};
use smart_default::SmartDefault;
use url::Url;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote user API configuration.
    pub remote: Remote,

    /// Local storage configuration.
    pub storage: Storage,

    /// Store configuration.
    pub store: Store,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Remote user API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Remote {
    /// Base URL of the API.
    #[default("https://reqres.in/api".to_owned())]
    pub base_url: String,

    /// Static API key to authenticate with.
    ///
    /// Empty key disables the authentication.
    #[debug(skip)]
    #[default("reqres-free-v1".to_owned())]
    pub api_key: String,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl TryFrom<Remote> for reqres::Config {
    type Error = url::ParseError;

    fn try_from(value: Remote) -> Result<Self, Self::Error> {
        let Remote {
            base_url,
            api_key,
            timeout,
        } = value;

        Ok(Self {
            base_url: Url::parse(&base_url)?,
            api_key: (!api_key.is_empty())
                .then(|| SecretString::new(api_key.into_boxed_str())),
            timeout,
        })
    }
}

/// Local storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Directory to keep the persisted preferences in.
    #[default(dirs::data_dir().unwrap_or_default().join("user-directory"))]
    pub dir: PathBuf,
}

/// Store configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Store {
    /// Resolution of overlapping fetches.
    pub ordering: fetch::Ordering,
}

impl From<Store> for service::Config {
    fn from(value: Store) -> Self {
        let Store { ordering } = value;
        Self { ordering }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
