use std::{io, sync::OnceLock};

use application::{args::Action, render, Args, Config, Store};
use service::{
    command::{
        Command as _, Dispatch as _, RequestPage, RequestUserDetail,
        SetSearchTerm, SetShowFavoritesOnly, ToggleFavorite, ToggleTheme,
    },
    event,
    infra::{reqres, storage, Reqres},
    query::VisibleUsers,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(false)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(false)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, action } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        remote,
        storage,
        store,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let remote = reqres::Config::try_from(remote).map_err(|e| {
        log::error!("invalid `remote.base_url`: {e}");
    })?;
    let remote = Reqres::new(remote).map_err(|e| {
        log::error!("failed to initialize `Reqres` client: {e}");
    })?;

    let store = Store::new(
        store.into(),
        remote,
        storage::File::new(storage.dir),
        event::Log,
    );

    match action {
        Action::List {
            page,
            search,
            favorites_only,
        } => list(&store, page, search, favorites_only).await,
        Action::Show { id } => {
            _ = store.execute(RequestUserDetail(id)).await;
            let state = store.snapshot();
            fail_on_error(state.error())?;
            if let Some(user) = state.selected_user() {
                let favorite = state.favorites().contains(user.id);
                log::info!("{}", render::details(user, favorite));
            }
            Ok(())
        }
        Action::Favorite { id } => {
            _ = store.dispatch(ToggleFavorite(id));
            log::info!(
                "favorites: {:?}",
                store.snapshot().favorites().iter().collect::<Vec<_>>(),
            );
            Ok(())
        }
        Action::Theme => {
            if let Ok(theme) = store.dispatch(ToggleTheme) {
                log::info!("switched to {}", render::theme(theme));
            }
            Ok(())
        }
    }
}

/// Lists the visible users of the provided `page`.
async fn list(
    store: &Store,
    page: common::pagination::Number,
    search: String,
    favorites_only: bool,
) -> Result<(), ()> {
    _ = store.dispatch(SetSearchTerm(search));
    _ = store.dispatch(SetShowFavoritesOnly(favorites_only));
    _ = store.execute(RequestPage(page)).await;

    let state = store.snapshot();
    fail_on_error(state.error())?;

    let visible = store.dispatch(VisibleUsers).unwrap_or_default();
    if visible.is_empty() {
        log::info!("no users found");
    }
    for user in &visible {
        let favorite = state.favorites().contains(user.id);
        log::info!("{}", render::card(user, favorite));
    }

    let info = state.page_info();
    if let Some(summary) = render::summary(&info) {
        log::info!("{summary}");
    }
    log::info!("{}", render::pager(&info));
    Ok(())
}

/// Logs the provided fetch `error`, if any, and fails.
fn fail_on_error(error: Option<&str>) -> Result<(), ()> {
    error.map_or(Ok(()), |e| {
        log::error!("{e}");
        Err(())
    })
}
