//! Configuration loading
//!
//! Settings come from an optional TOML file layered under `ROSTER_*`
//! environment variables. Command-line flags are applied on top by the
//! caller via [`AppConfig::apply_overrides`].

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start with the two example students
    pub seed_examples: bool,
    /// Colored output
    pub color: ColorMode,
    /// Diagnostic log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
            color: ColorMode::Auto,
            log_level: "warn".to_string(),
        }
    }
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub no_seed: bool,
    pub no_color: bool,
}

impl AppConfig {
    /// Apply command-line overrides
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.no_seed {
            self.seed_examples = false;
        }
        if overrides.no_color {
            self.color = ColorMode::Never;
        }
        self
    }

    /// Parsed log level
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(ConfigError::InvalidLogLevel(self.log_level.clone())),
        }
    }
}

/// Configuration loader
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a loader for the default config path
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "ROSTER".to_string(),
        }
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the TOML file this loader reads
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roster")
            .join("config.toml")
    }

    /// Load configuration; a missing file yields the defaults
    pub fn load(&self) -> Result<AppConfig> {
        let path = self.config_path();
        let load_err = |source: config::ConfigError| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        };

        let config = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build()
            .map_err(load_err)?;

        let app_config: AppConfig = config.try_deserialize().map_err(load_err)?;
        app_config.tracing_level()?;
        Ok(app_config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
