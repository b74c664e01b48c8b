//! Interactive hub settings (`[hub]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHubConfig {
    /// Spinner and task messages while a crew runs
    pub show_progress: bool,
    /// Line history; `~/` is expanded
    pub history_file: Option<String>,
}

impl FileHubConfig {
    /// Where line history is kept. Without `history_file`, the platform
    /// data directory (`~/.local/share/crew-hub/history.txt` on Linux).
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|dir| dir.join("crew-hub").join("history.txt")),
        }
    }
}

impl Default for FileHubConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
