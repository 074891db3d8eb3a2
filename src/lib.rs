pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod database;
pub mod favorites;
pub mod models;
pub mod query;
pub mod selection;
pub mod state;
pub mod syntax;

// Re-export AppState for commands
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::Catalog;
use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean for output.
///
/// An explicit `filter` wins over `RUST_LOG`. Calling this twice is harmless.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = match filter {
        Some(f) => tracing_subscriber::EnvFilter::new(f),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Build the session state for the built-in catalog and the configured favorites store
pub fn open_session(config: &AppConfig) -> AppState {
    tracing::info!("Starting dockref session");
    AppState::new(Catalog::built_in(), config.open_favorites_store())
}
