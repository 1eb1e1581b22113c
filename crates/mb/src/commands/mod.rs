//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod menu;
pub(crate) mod routes;

use std::path::PathBuf;

use clap::Args;
use mb_config::{CliSettings, Config};
use mb_prefs::{FileStore, NullStore, PreferenceStore};
use mb_routes::{RouteTree, app_routes};

use crate::error::CliError;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use menu::{MenuArgs, MenuToggleArgs};
pub(crate) use routes::RoutesArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover mb.toml).
    #[arg(short, long, env = "MB_CONFIG")]
    config: Option<PathBuf>,

    /// TOML route table (overrides config; default: built-in routes).
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Preferences file (overrides config).
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Do not read or write preferences.
    #[arg(long)]
    no_preferences: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with these arguments applied as overrides.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            routes_file: self.routes.clone(),
            preferences_path: self.preferences.clone(),
            preferences_enabled: self.no_preferences.then_some(false),
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}

/// Build the route tree named by the configuration.
///
/// Falls back to the built-in application routes when no file is configured.
pub(crate) fn load_routes(config: &Config) -> Result<RouteTree, CliError> {
    let tree = match &config.routes_resolved.file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using route table");
            RouteTree::load(path)?
        }
        None => app_routes()?,
    };
    Ok(tree)
}

/// Open the preference store named by the configuration.
pub(crate) fn open_preferences(config: &Config) -> Box<dyn PreferenceStore> {
    let prefs = &config.preferences_resolved;
    if prefs.enabled {
        Box::new(FileStore::new(prefs.path.clone()))
    } else {
        Box::new(NullStore)
    }
}
