//! Raw TOML configuration data types
//!
//! These structs mirror the config file one section each. Every field has
//! a default, so a partial file (or none at all) is valid.

mod catalog;
mod crew;
mod hub;
mod logging;
mod ollama;
mod output;

pub use catalog::FileCatalogConfig;
pub use crew::FileCrewConfig;
pub use hub::FileHubConfig;
pub use logging::FileLoggingConfig;
pub use ollama::FileOllamaConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} cannot be 0")]
    InvalidTimeout { field: &'static str },

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("invalid Ollama base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ollama: FileOllamaConfig,
    pub crew: FileCrewConfig,
    pub catalog: FileCatalogConfig,
    pub output: FileOutputConfig,
    pub hub: FileHubConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Reject settings no run could succeed with.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.ollama.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let base_url = self.ollama.base_url.trim();
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => return Err(ConfigValidationError::InvalidBaseUrl(base_url.to_string())),
        }

        if self.ollama.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout {
                field: "ollama.timeout_seconds",
            });
        }
        if self.crew.task_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout {
                field: "crew.task_timeout_seconds",
            });
        }

        Ok(())
    }
}
