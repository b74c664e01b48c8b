//! Task definitions

use super::agent::AgentId;
use serde::{Deserialize, Serialize};

/// Expected output used when a task does not declare one.
pub const DEFAULT_EXPECTED_OUTPUT: &str = "Result of the task.";

/// Identifier of a task within a crew
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A textual work item assigned to one agent.
///
/// `context` lists tasks whose outputs are handed to this task. Those tasks
/// must appear earlier in the crew's task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: TaskId,
    pub description: String,
    pub expected_output: String,
    pub agent: AgentId,
    #[serde(default)]
    pub context: Vec<TaskId>,
}

impl TaskSpec {
    pub fn new(id: impl Into<TaskId>, description: impl Into<String>, agent: &AgentId) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            expected_output: DEFAULT_EXPECTED_OUTPUT.to_string(),
            agent: agent.clone(),
            context: Vec::new(),
        }
    }

    pub fn with_expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = expected.into();
        self
    }

    /// Declare the tasks whose outputs this task consumes.
    pub fn with_context<'a>(mut self, tasks: impl IntoIterator<Item = &'a TaskSpec>) -> Self {
        self.context = tasks.into_iter().map(|t| t.id.clone()).collect();
        self
    }

    pub fn depends_on(&self, id: &TaskId) -> bool {
        self.context.contains(id)
    }
}
