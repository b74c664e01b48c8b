//! Domain layer for crew-hub
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Crew
//!
//! A crew is a set of role-playing agents and an ordered list of tasks:
//!
//! - **Agent**: a persona (role, goal, backstory) backed by a model
//! - **Task**: a textual work item assigned to one agent, optionally
//!   consuming the outputs of earlier tasks
//! - **Process**: tasks run sequentially; the last output is the answer
//!
//! ## Use Case
//!
//! A use case builds a crew from free-form input through three hooks
//! (`setup_agents`, `setup_tasks`, `setup_crew`). The [`catalog`] holds the
//! built-in financial and research scenarios.
//!
//! ## Knowledge Graph
//!
//! [`knowledge`] links documents, keywords, researchers and datasets in a
//! small in-memory graph for research-assistant demonstrations.

pub mod catalog;
pub mod config;
pub mod core;
pub mod crew;
pub mod knowledge;
pub mod prompt;
pub mod tool;
pub mod use_case;

// Re-export commonly used types
pub use catalog::builtin_use_cases;
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    model::{DEFAULT_MODEL, Model},
};
pub use crew::{
    agent::{AgentId, AgentRole},
    crew::{Crew, Process},
    output::{CrewOutput, TaskOutput},
    task::{DEFAULT_EXPECTED_OUTPUT, TaskId, TaskSpec},
};
pub use knowledge::{KnowledgeGraph, NodeKind, Showcase, ShowcaseReport};
pub use prompt::CrewPromptTemplate;
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolErrorCode, ToolResult},
};
pub use use_case::{
    category::UseCaseCategory,
    input::UseCaseInput,
    metadata::{UseCaseId, UseCaseMetadata},
    record::RunRecord,
    traits::{UseCase, UseCaseContext},
};
