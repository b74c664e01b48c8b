//! Ollama connection settings (`[ollama]` section)

use crate::ollama::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crew_domain::{DEFAULT_MODEL, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Model tag every agent uses
    pub model: String,
    /// Server address
    pub base_url: String,
    /// Per-request HTTP timeout
    pub timeout_seconds: u64,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl FileOllamaConfig {
    pub fn model(&self) -> Model {
        Model::new(self.model.trim())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
