//! Configuration management for mimisbrunnr.
//!
//! Parses `mb.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `routes.file`
//! - `preferences.path`
//!
//! ## Example
//!
//! ```toml
//! [routes]
//! file = "routes.toml"
//!
//! [preferences]
//! path = "${XDG_STATE_HOME:-.mb}/preferences.json"
//! enabled = true
//!
//! [breadcrumbs]
//! separator = " > "
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override route table file.
    pub routes_file: Option<PathBuf>,
    /// Override preferences file.
    pub preferences_path: Option<PathBuf>,
    /// Override preferences enabled flag.
    pub preferences_enabled: Option<bool>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "mb.toml";

/// Default breadcrumb separator for text output.
const DEFAULT_SEPARATOR: &str = " / ";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Route table configuration (paths are relative strings from TOML).
    routes: RoutesConfigRaw,
    /// Preferences configuration (paths are relative strings from TOML).
    preferences: PreferencesConfigRaw,
    /// Breadcrumb rendering configuration.
    pub breadcrumbs: BreadcrumbsConfig,

    /// Resolved route table configuration (set after loading).
    #[serde(skip)]
    pub routes_resolved: RoutesConfig,
    /// Resolved preferences configuration (set after loading).
    #[serde(skip)]
    pub preferences_resolved: PreferencesConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw route table configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RoutesConfigRaw {
    file: Option<String>,
}

/// Resolved route table configuration.
#[derive(Debug, Default)]
pub struct RoutesConfig {
    /// TOML route table. The built-in routes are used when unset.
    pub file: Option<PathBuf>,
}

/// Raw preferences configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PreferencesConfigRaw {
    path: Option<String>,
    enabled: Option<bool>,
}

/// Resolved preferences configuration with absolute paths.
#[derive(Debug, Default)]
pub struct PreferencesConfig {
    /// JSON file holding persisted UI preferences.
    pub path: PathBuf,
    /// Whether preferences are read and written at all.
    pub enabled: bool,
}

/// Breadcrumb rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    /// Separator placed between breadcrumb titles in text output.
    pub separator: String,
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`preferences.path`").
        field: String,
        /// Error message (e.g., "${`MB_STATE_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mb.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(file) = &settings.routes_file {
            self.routes_resolved.file = Some(file.clone());
        }
        if let Some(path) = &settings.preferences_path {
            self.preferences_resolved.path.clone_from(path);
        }
        if let Some(enabled) = settings.preferences_enabled {
            self.preferences_resolved.enabled = enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            routes: RoutesConfigRaw::default(),
            preferences: PreferencesConfigRaw::default(),
            breadcrumbs: BreadcrumbsConfig::default(),
            routes_resolved: RoutesConfig::default(),
            preferences_resolved: PreferencesConfig {
                path: default_preferences_path(base),
                enabled: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breadcrumbs.separator.is_empty() {
            return Err(ConfigError::Validation(
                "breadcrumbs.separator cannot be empty".to_owned(),
            ));
        }
        if self
            .routes
            .file
            .as_deref()
            .is_some_and(|file| file.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "routes.file cannot be empty".to_owned(),
            ));
        }
        if self
            .preferences
            .path
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "preferences.path cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref file) = self.routes.file {
            self.routes.file = Some(expand::expand_env(file, "routes.file")?);
        }
        if let Some(ref path) = self.preferences.path {
            self.preferences.path = Some(expand::expand_env(path, "preferences.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.routes_resolved = RoutesConfig {
            file: self.routes.file.as_deref().map(|file| config_dir.join(file)),
        };

        self.preferences_resolved = PreferencesConfig {
            path: self
                .preferences
                .path
                .as_deref()
                .map_or_else(|| default_preferences_path(config_dir), |p| config_dir.join(p)),
            enabled: self.preferences.enabled.unwrap_or(true),
        };
    }
}

/// Preferences file under the project data directory (`.mb/`).
fn default_preferences_path(base: &Path) -> PathBuf {
    base.join(".mb").join("preferences.json")
}
