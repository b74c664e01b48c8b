//! Crew execution results

use super::task::TaskId;
use serde::{Deserialize, Serialize};

/// Raw text produced by one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task_id: TaskId,
    pub agent_role: String,
    pub description: String,
    pub raw: String,
}

impl TaskOutput {
    pub fn new(
        task_id: TaskId,
        agent_role: impl Into<String>,
        description: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            agent_role: agent_role.into(),
            description: description.into(),
            raw: raw.into(),
        }
    }
}

/// Ordered outputs of every task a crew ran.
///
/// The crew's answer is the output of its last task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewOutput {
    pub tasks: Vec<TaskOutput>,
}

impl CrewOutput {
    pub fn new(tasks: Vec<TaskOutput>) -> Self {
        Self { tasks }
    }

    pub fn push(&mut self, output: TaskOutput) {
        self.tasks.push(output);
    }

    pub fn final_output(&self) -> &str {
        self.tasks.last().map(|t| t.raw.as_str()).unwrap_or("")
    }

    pub fn task_output(&self, id: &TaskId) -> Option<&TaskOutput> {
        self.tasks.iter().find(|t| &t.task_id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl std::fmt::Display for CrewOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.final_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_output_is_last_task() {
        let mut output = CrewOutput::default();
        assert_eq!(output.final_output(), "");
        output.push(TaskOutput::new(TaskId::new("a"), "Analyst", "one", "first"));
        output.push(TaskOutput::new(TaskId::new("b"), "Writer", "two", "second"));

        assert_eq!(output.final_output(), "second");
        assert_eq!(output.to_string(), "second");
        assert_eq!(output.task_output(&TaskId::new("a")).unwrap().raw, "first");
        assert_eq!(output.len(), 2);
    }
}
