//! Infrastructure layer for crew-hub
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Ollama gateway, research tools,
//! README metadata scanning, run logging and configuration loading.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod ollama;
pub mod tools;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use catalog::DirectoryMetadataSource;
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileCrewConfig,
    FileHubConfig, FileLoggingConfig, FileOllamaConfig, FileOutputConfig,
};
pub use logging::JsonlRunLogger;
pub use ollama::{OllamaClient, OllamaLlmGateway, OllamaSession};
pub use tools::{LocalToolExecutor, default_tool_spec};
