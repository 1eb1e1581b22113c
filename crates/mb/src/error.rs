//! CLI error types.

use mb_config::ConfigError;
use mb_prefs::PreferenceError;
use mb_routes::RouteTreeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Routes(#[from] RouteTreeError),

    #[error("{0}")]
    Preferences(#[from] PreferenceError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
