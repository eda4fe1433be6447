//! Configuration loading and access.
//!
//! Sources are merged in increasing priority: the per-user file
//! (`~/.config/unity-threads/config.toml`), `config.toml` in the working
//! directory, then `UNITY__`-prefixed environment variables (including those
//! from `.env`). `--config <path>` replaces both files with a single required
//! one. Every file is optional otherwise; all settings have defaults.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub mod admin;
pub mod app;
pub mod keys;
pub mod limits;
pub mod paths;
pub mod selection;
pub mod validation;

pub use admin::AdminConfig;
pub use app::AppConfig;
pub use keys::KeyBindingsConfig;
pub use selection::{SelectionConfig, SelectionWarning};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Global configuration, loaded once
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Environment variable prefix, e.g. `UNITY__SELECTION__THEME=asian`.
pub const ENV_PREFIX: &str = "UNITY";

/// Load configuration from the default locations, or only from `path` when given.
pub fn load_config_from(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    match path {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            match paths::get_config_file_path() {
                Ok(user_file) => {
                    builder = builder.add_source(File::from(user_file).required(false));
                }
                Err(e) => log::debug!("Skipping per-user config file: {e}"),
            }
            builder = builder.add_source(File::with_name("config.toml").required(false));
        }
    }

    let config = match builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the global configuration. Only the first call reads sources.
pub fn init_config(path: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config_from(path))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config_from(None))
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn new(level: Option<String>, file: Option<String>) -> Self {
        Self { level, file }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
