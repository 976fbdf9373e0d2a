//! Configuration for the gradebook service
//!
//! Values are layered, lowest priority first: built-in defaults, a TOML
//! file, `GRADEBOOK_*` environment variables, then command-line flags.

pub mod loader;

pub use loader::{load_config, DEFAULT_CONFIG_FILE};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{GradebookError, Result};
use crate::storage::{BackendType, StorageConfig};

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            storage: StorageConfig::default(),
        }
    }
}

impl GradebookConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `GRADEBOOK_*` variables from the process environment
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `GRADEBOOK_*` variables obtained through `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GRADEBOOK_HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("GRADEBOOK_PORT") {
            self.port = port.trim().parse().map_err(|_| {
                GradebookError::config(format!("GRADEBOOK_PORT is not a valid port: {}", port))
            })?;
        }

        if let Some(level) = lookup("GRADEBOOK_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(backend) = lookup("GRADEBOOK_STORAGE_BACKEND") {
            self.storage.backend = backend
                .parse::<BackendType>()
                .map_err(|e| GradebookError::config(e.to_string()))?;
        }

        if let Some(path) = lookup("GRADEBOOK_DATABASE_PATH") {
            self.storage.database_path = PathBuf::from(path);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(GradebookError::config("host must not be empty"));
        }

        let level = self.log_level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(GradebookError::config(format!(
                "invalid log_level '{}': expected one of {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if self.storage.max_connections == 0 {
            return Err(GradebookError::config(
                "storage.max_connections must be at least 1",
            ));
        }

        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}
