//! Configuration file loading for crew-hub
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. Default values
//! 2. Global: `$XDG_CONFIG_HOME/crew-hub/config.toml` (or `~/.config/crew-hub/config.toml`)
//! 3. Project root: `./crew-hub.toml` or `./.crew-hub.toml`
//! 4. `--config <path>` specified file
//! 5. Environment: `OLLAMA_MODEL`, `OLLAMA_BASE_URL`, `CREW_HUB_*`

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileCrewConfig, FileHubConfig,
    FileLoggingConfig, FileOllamaConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
