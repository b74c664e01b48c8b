//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Crew has no agents")]
    NoAgents,

    #[error("Crew has no tasks")]
    NoTasks,

    #[error("Task '{task}' is assigned to unknown agent '{agent}'")]
    UnknownAgent { task: String, agent: String },

    #[error("Task '{task}' depends on '{dependency}', which is not constructed before it")]
    UnresolvedContext { task: String, dependency: String },

    #[error("Duplicate task id: {0}")]
    DuplicateTask(String),

    #[error("Duplicate agent id: {0}")]
    DuplicateAgent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Use case {0} not found")]
    UnknownUseCase(String),
}
