//! Log file settings (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the JSONL run log and the rolling tracing log.
    /// Logging to files is off when unset.
    pub run_log_dir: Option<PathBuf>,
}
