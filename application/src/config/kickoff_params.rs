//! Kickoff parameters: crew execution control.
//!
//! [`KickoffParams`] groups the static parameters that control
//! [`KickoffCrewUseCase`](crate::use_cases::kickoff_crew::KickoffCrewUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bound on one task's model round trip.
pub const DEFAULT_TASK_TIMEOUT: Duration = Duration::from_secs(300);

/// Default budget for tool output handed to a task.
pub const DEFAULT_MAX_REFERENCE_CHARS: usize = 4000;

/// Crew execution control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickoffParams {
    /// Upper bound for each task's model call. `None` waits forever.
    pub task_timeout: Option<Duration>,
    /// Characters of tool output kept per task.
    pub max_reference_chars: usize,
    /// Whether agents consult their tools before answering.
    pub use_tools: bool,
}

impl Default for KickoffParams {
    fn default() -> Self {
        Self {
            task_timeout: Some(DEFAULT_TASK_TIMEOUT),
            max_reference_chars: DEFAULT_MAX_REFERENCE_CHARS,
            use_tools: true,
        }
    }
}

impl KickoffParams {
    // ==================== Builder Methods ====================

    pub fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }

    pub fn with_max_reference_chars(mut self, max: usize) -> Self {
        self.max_reference_chars = max;
        self
    }

    pub fn with_tools(mut self, enabled: bool) -> Self {
        self.use_tools = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = KickoffParams::default();
        assert_eq!(params.task_timeout, Some(Duration::from_secs(300)));
        assert_eq!(params.max_reference_chars, 4000);
        assert!(params.use_tools);
    }

    #[test]
    fn test_builder() {
        let params = KickoffParams::default()
            .with_task_timeout(None)
            .with_max_reference_chars(100)
            .with_tools(false);

        assert!(params.task_timeout.is_none());
        assert_eq!(params.max_reference_chars, 100);
        assert!(!params.use_tools);
    }
}
