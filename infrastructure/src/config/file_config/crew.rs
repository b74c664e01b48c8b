//! Crew execution settings (`[crew]` section)

use crew_application::config::KickoffParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCrewConfig {
    /// Upper bound on one task's model call
    pub task_timeout_seconds: u64,
    /// Tool output kept per task prompt
    pub max_reference_chars: usize,
    /// Whether agents consult their tools
    pub use_tools: bool,
}

impl Default for FileCrewConfig {
    fn default() -> Self {
        let params = KickoffParams::default();
        Self {
            task_timeout_seconds: params.task_timeout.map(|d| d.as_secs()).unwrap_or(0),
            max_reference_chars: params.max_reference_chars,
            use_tools: params.use_tools,
        }
    }
}

impl FileCrewConfig {
    pub fn to_kickoff_params(&self) -> KickoffParams {
        KickoffParams::default()
            .with_task_timeout(Some(Duration::from_secs(self.task_timeout_seconds)))
            .with_max_reference_chars(self.max_reference_chars)
            .with_tools(self.use_tools)
    }
}
