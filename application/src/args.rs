//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::pagination;
use service::domain::user;

/// Client of the user directory.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform.
    #[command(subcommand)]
    pub action: Action,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action of the user directory client.
#[derive(Clone, Debug, Subcommand)]
pub enum Action {
    /// Lists users of a page.
    List {
        /// Number of the page to list.
        #[arg(short, long, default_value_t = pagination::Number::FIRST)]
        page: pagination::Number,

        /// Text to search users by.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Whether to list favorite users only.
        #[arg(short, long)]
        favorites_only: bool,
    },

    /// Shows details of a user.
    Show {
        /// ID of the user.
        id: user::Id,
    },

    /// Adds a user to the favorites, or removes it from there.
    Favorite {
        /// ID of the user.
        id: user::Id,
    },

    /// Switches the color theme.
    Theme,
}
