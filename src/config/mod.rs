//! Configuration module for tripdesk
//!
//! Holds user defaults for browsing: page size, where user-defined schemas
//! live, and output verbosity.
//! Configuration is stored in the user's config directory
//! (`~/.config/tripdesk/config.toml` on Linux). Values can be overridden with
//! `TRIPDESK_*` environment variables, e.g. `TRIPDESK_PAGE_SIZE=10`.

use crate::browser::DEFAULT_PAGE_SIZE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TripdeskConfig {
    /// Page size for entities that do not declare one
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Directory holding user-defined schema TOML files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_dir: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for TripdeskConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            schema_dir: None,
            quiet: false,
        }
    }
}

impl TripdeskConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        crate::schema::config_dir()
            .map(|dir| dir.join("config.toml"))
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created,
    /// or the loaded page size is zero.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "writing default configuration");
            Self::default().save_to(path)?;
        }

        let config: Self = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("TRIPDESK").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Directory to read user-defined schemas from
    ///
    /// The configured directory if set, otherwise `~/.config/tripdesk/schemas`.
    #[must_use]
    pub fn schema_dir(&self) -> Option<PathBuf> {
        self.schema_dir.clone().or_else(crate::schema::default_schema_dir)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the page size is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
