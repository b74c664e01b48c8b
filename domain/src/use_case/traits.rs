//! The use case abstraction: three hooks that turn input into a crew.

use super::input::UseCaseInput;
use super::metadata::UseCaseMetadata;
use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::crew::agent::AgentRole;
use crate::crew::crew::{Crew, Process};
use crate::crew::task::TaskSpec;

/// What every agent of a use case is equipped with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseCaseContext {
    /// Model all agents talk to.
    pub model: Model,
    /// Names of the auxiliary tools available to agents.
    pub tools: Vec<String>,
}

impl UseCaseContext {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            tools: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }
}

/// A demonstration scenario: a handful of agents and the tasks they run.
///
/// Implementors override [`setup_agents`](Self::setup_agents) and
/// [`setup_tasks`](Self::setup_tasks); [`setup_crew`](Self::setup_crew)
/// composes them into a sequential crew and rarely needs overriding.
pub trait UseCase: Send + Sync {
    /// Built-in metadata, before any README override.
    fn metadata(&self) -> UseCaseMetadata;

    /// Role records for this use case.
    fn setup_agents(&self, ctx: &UseCaseContext) -> Vec<AgentRole>;

    /// Task records, each assigned to one of `agents`.
    fn setup_tasks(&self, agents: &[AgentRole], input: &UseCaseInput) -> Vec<TaskSpec>;

    /// Input keys this use case reads besides `query`.
    fn input_keys(&self) -> &'static [&'static str] {
        &[]
    }

    fn setup_crew(&self, ctx: &UseCaseContext, input: &UseCaseInput) -> Result<Crew, DomainError> {
        let agents = self.setup_agents(ctx);
        let tasks = self.setup_tasks(&agents, input);
        Crew::new(agents, tasks, Process::Sequential)
    }
}
