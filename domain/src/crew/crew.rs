//! Crew composition and validation

use super::agent::{AgentId, AgentRole};
use super::task::{TaskId, TaskSpec};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a crew sequences its tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Tasks run one after another in declaration order.
    #[default]
    Sequential,
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Process::Sequential => write!(f, "sequential"),
        }
    }
}

/// A validated set of agents and the tasks they execute.
///
/// Construction guarantees:
/// - at least one agent and one task
/// - agent ids and task ids are unique
/// - every task is assigned to an agent of this crew
/// - every context dependency names a task declared earlier in the list
#[derive(Debug, Clone, Serialize)]
pub struct Crew {
    agents: Vec<AgentRole>,
    tasks: Vec<TaskSpec>,
    process: Process,
}

impl Crew {
    pub fn new(
        agents: Vec<AgentRole>,
        tasks: Vec<TaskSpec>,
        process: Process,
    ) -> Result<Self, DomainError> {
        if agents.is_empty() {
            return Err(DomainError::NoAgents);
        }
        if tasks.is_empty() {
            return Err(DomainError::NoTasks);
        }

        let mut agent_ids: HashSet<&AgentId> = HashSet::new();
        for agent in &agents {
            if !agent_ids.insert(&agent.id) {
                return Err(DomainError::DuplicateAgent(agent.id.to_string()));
            }
        }

        let mut constructed: HashSet<&TaskId> = HashSet::new();
        for task in &tasks {
            if !agent_ids.contains(&task.agent) {
                return Err(DomainError::UnknownAgent {
                    task: task.id.to_string(),
                    agent: task.agent.to_string(),
                });
            }
            if let Some(missing) = task.context.iter().find(|dep| !constructed.contains(dep)) {
                return Err(DomainError::UnresolvedContext {
                    task: task.id.to_string(),
                    dependency: missing.to_string(),
                });
            }
            if !constructed.insert(&task.id) {
                return Err(DomainError::DuplicateTask(task.id.to_string()));
            }
        }

        Ok(Self {
            agents,
            tasks,
            process,
        })
    }

    /// Sequential crew, the only process supported.
    pub fn sequential(agents: Vec<AgentRole>, tasks: Vec<TaskSpec>) -> Result<Self, DomainError> {
        Self::new(agents, tasks, Process::Sequential)
    }

    pub fn agents(&self) -> &[AgentRole] {
        &self.agents
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    pub fn process(&self) -> Process {
        self.process
    }

    pub fn agent(&self, id: &AgentId) -> Option<&AgentRole> {
        self.agents.iter().find(|a| &a.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&TaskSpec> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}
