//! Rune configuration system
//!
//! This crate loads the component library's runtime settings from `rune.toml`,
//! with environment variables taking precedence over file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "rune.toml";

/// Errors that can occur while loading `rune.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`RuneConfig`].
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Animation registry settings
    pub motion: MotionConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Animation registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Animation set (.json or .toml) installed as library defaults at startup
    pub animations_path: Option<PathBuf>,
    /// Register the built-in component animations (default: true)
    pub builtin_defaults: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "rune_motion=trace"
    pub filter: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            animations_path: None,
            builtin_defaults: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from `rune.toml` in the current directory, or
    /// return the default configuration if the file doesn't exist.
    ///
    /// A file that exists but fails to load is reported and ignored.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(path).unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring invalid configuration file");
            Self::default()
        })
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Motion settings
        if let Some(path) = lookup("RUNE_ANIMATIONS_PATH") {
            self.motion.animations_path = Some(PathBuf::from(path));
        }
        if let Some(val) = lookup("RUNE_BUILTIN_ANIMATIONS") {
            self.motion.builtin_defaults = env_flag(&val);
        }

        // Logging settings
        if let Some(filter) = lookup("RUNE_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
