//! Kickoff Crew use case
//!
//! Runs a crew's tasks one after another. Each task opens a session in its
//! agent's persona, receives the outputs of the tasks it depends on plus
//! any reference material from the agent's tools, and contributes one
//! output. The last output is the crew's answer.

use crate::config::KickoffParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{CrewProgressNotifier, NoCrewProgress};
use crate::ports::run_logger::{NoRunLogger, RunEvent, RunLogger};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::gather_references::GatherReferencesUseCase;
use crew_domain::{
    AgentRole, Crew, CrewOutput, CrewPromptTemplate, DomainError, Model, TaskId, TaskOutput,
    TaskSpec,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that stop a crew
#[derive(Error, Debug)]
pub enum CrewError {
    #[error("Task '{task}' failed: {source}")]
    TaskFailed {
        task: TaskId,
        #[source]
        source: GatewayError,
    },

    #[error("Task '{0}' returned an empty response")]
    EmptyResponse(TaskId),

    #[error("Crew execution cancelled")]
    Cancelled,

    #[error("Invalid crew: {0}")]
    InvalidCrew(#[from] DomainError),
}

/// Input for the KickoffCrew use case
#[derive(Debug, Clone)]
pub struct KickoffCrewInput {
    pub crew: Crew,
    /// Model every agent talks to
    pub model: Model,
    /// Search query for tools; each task's description is used when empty
    pub query: String,
}

impl KickoffCrewInput {
    pub fn new(crew: Crew, model: Model) -> Self {
        Self {
            crew,
            model,
            query: String::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

/// Use case for running a crew sequentially
pub struct KickoffCrewUseCase<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> {
    gateway: Arc<G>,
    references: GatherReferencesUseCase<T>,
    params: KickoffParams,
    run_logger: Arc<dyn RunLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> KickoffCrewUseCase<G, T> {
    pub fn new(gateway: Arc<G>, tool_executor: Arc<T>) -> Self {
        Self {
            gateway,
            references: GatherReferencesUseCase::new(tool_executor),
            params: KickoffParams::default(),
            run_logger: Arc::new(NoRunLogger),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: KickoffParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_run_logger(mut self, logger: Arc<dyn RunLogger>) -> Self {
        self.run_logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the crew with default (no-op) progress
    pub async fn execute(&self, input: KickoffCrewInput) -> Result<CrewOutput, CrewError> {
        self.execute_with_progress(input, &NoCrewProgress).await
    }

    /// Execute the crew with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: KickoffCrewInput,
        progress: &dyn CrewProgressNotifier,
    ) -> Result<CrewOutput, CrewError> {
        let crew = &input.crew;
        let total = crew.tasks().len();

        info!(
            "Kicking off crew: {} agent(s), {} task(s), model {}",
            crew.agents().len(),
            total,
            input.model
        );
        self.run_logger.log(RunEvent::new(
            "crew_start",
            json!({
                "model": input.model.as_str(),
                "process": crew.process().to_string(),
                "agents": crew.agents().iter().map(|a| a.role.as_str()).collect::<Vec<_>>(),
                "tasks": crew.tasks().iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            }),
        ));
        progress.on_crew_start(total);

        let mut output = CrewOutput::default();

        for (index, task) in crew.tasks().iter().enumerate() {
            let agent = crew
                .agent(&task.agent)
                .ok_or_else(|| DomainError::UnknownAgent {
                    task: task.id.to_string(),
                    agent: task.agent.to_string(),
                })?;

            match self
                .run_task(index, task, agent, &input, &output, progress)
                .await
            {
                Ok(task_output) => {
                    progress.on_task_complete(index, &task_output);
                    output.push(task_output);
                }
                Err(e) => {
                    warn!("Task {} ({}) failed: {}", index + 1, task.id, e);
                    progress.on_task_failed(index, &e.to_string());
                    self.run_logger.log(RunEvent::new(
                        "task_failed",
                        json!({ "task": task.id.as_str(), "error": e.to_string() }),
                    ));
                    return Err(e);
                }
            }
        }

        info!("Crew finished after {} task(s)", output.len());
        self.run_logger.log(RunEvent::new(
            "crew_complete",
            json!({ "tasks": output.len(), "final_chars": output.final_output().len() }),
        ));
        progress.on_crew_complete(&output);
        Ok(output)
    }

    async fn run_task(
        &self,
        index: usize,
        task: &TaskSpec,
        agent: &AgentRole,
        input: &KickoffCrewInput,
        done: &CrewOutput,
        progress: &dyn CrewProgressNotifier,
    ) -> Result<TaskOutput, CrewError> {
        self.check_cancelled()?;

        info!("Task {}: '{}' assigned to {}", index + 1, task.id, agent.role);
        progress.on_task_start(index, task, agent);
        self.run_logger.log(RunEvent::new(
            "task_start",
            json!({ "index": index, "task": task.id.as_str(), "agent": agent.role }),
        ));

        let references = if self.params.use_tools && agent.has_tools() {
            let query = if input.query.trim().is_empty() {
                task.description.as_str()
            } else {
                input.query.as_str()
            };
            let gather =
                self.references
                    .execute(agent, query, self.params.max_reference_chars, progress);
            match &self.cancellation_token {
                Some(token) => tokio::select! {
                    _ = token.cancelled() => return Err(CrewError::Cancelled),
                    references = gather => references,
                },
                None => gather.await,
            }
        } else {
            None
        };

        self.check_cancelled()?;

        let context: Vec<&TaskOutput> = task
            .context
            .iter()
            .filter_map(|id| done.task_output(id))
            .collect();
        let system_prompt = CrewPromptTemplate::agent_system(agent);
        let prompt = CrewPromptTemplate::task_prompt(task, &context, references.as_deref());
        debug!(
            "Task '{}' prompt: {} chars, {} context output(s), references: {}",
            task.id,
            prompt.len(),
            context.len(),
            references.is_some()
        );

        let raw = self.send(&input.model, &system_prompt, &prompt).await.map_err(|e| match e {
            SendError::Cancelled => CrewError::Cancelled,
            SendError::Gateway(source) => CrewError::TaskFailed {
                task: task.id.clone(),
                source,
            },
        })?;

        if raw.trim().is_empty() {
            return Err(CrewError::EmptyResponse(task.id.clone()));
        }

        self.run_logger.log(RunEvent::new(
            "llm_response",
            json!({ "task": task.id.as_str(), "agent": agent.role, "text": raw }),
        ));

        Ok(TaskOutput::new(
            task.id.clone(),
            agent.role.clone(),
            task.description.clone(),
            raw.trim(),
        ))
    }

    /// One session per task, bounded by the task timeout and the token.
    async fn send(&self, model: &Model, system_prompt: &str, prompt: &str) -> Result<String, SendError> {
        let exchange = async {
            let session = self
                .gateway
                .open_session(model, Some(system_prompt))
                .await?;
            session.send(prompt).await
        };

        let bounded = async {
            match self.params.task_timeout {
                Some(limit) => tokio::time::timeout(limit, exchange)
                    .await
                    .unwrap_or(Err(GatewayError::Timeout)),
                None => exchange.await,
            }
        };

        match &self.cancellation_token {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(SendError::Cancelled),
                result = bounded => result.map_err(SendError::Gateway),
            },
            None => bounded.await.map_err(SendError::Gateway),
        }
    }

    fn check_cancelled(&self) -> Result<(), CrewError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(CrewError::Cancelled);
        }
        Ok(())
    }
}

enum SendError {
    Cancelled,
    Gateway(GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockToolExecutor, ScriptedGateway};
    use crew_domain::{AgentId, Process};
    use std::sync::Mutex;
    use std::time::Duration;

    fn two_step_crew() -> Crew {
        let writer = AgentRole::new("writer", "Writer", "Write drafts", "Prolific")
            .with_tools(["web_search"]);
        let editor = AgentRole::new("editor", "Editor", "Polish drafts", "Picky");
        let draft = TaskSpec::new("draft", "Write a draft", &AgentId::new("writer"));
        let edit = TaskSpec::new("edit", "Edit the draft", &AgentId::new("editor"))
            .with_context([&draft]);
        Crew::new(vec![writer, editor], vec![draft, edit], Process::Sequential).unwrap()
    }

    fn use_case(
        gateway: ScriptedGateway,
        tools: MockToolExecutor,
    ) -> (Arc<ScriptedGateway>, KickoffCrewUseCase<ScriptedGateway, MockToolExecutor>) {
        let gateway = Arc::new(gateway);
        let uc = KickoffCrewUseCase::new(gateway.clone(), Arc::new(tools));
        (gateway, uc)
    }

    #[derive(Default)]
    struct EventLog(Mutex<Vec<String>>);

    impl CrewProgressNotifier for EventLog {
        fn on_crew_start(&self, total_tasks: usize) {
            self.0.lock().unwrap().push(format!("start {total_tasks}"));
        }
        fn on_task_start(&self, index: usize, task: &TaskSpec, _agent: &AgentRole) {
            self.0.lock().unwrap().push(format!("task {index} {}", task.id));
        }
        fn on_task_complete(&self, index: usize, _output: &TaskOutput) {
            self.0.lock().unwrap().push(format!("done {index}"));
        }
        fn on_task_failed(&self, index: usize, _error: &str) {
            self.0.lock().unwrap().push(format!("failed {index}"));
        }
        fn on_crew_complete(&self, output: &CrewOutput) {
            self.0.lock().unwrap().push(format!("complete {}", output.len()));
        }
    }

    #[tokio::test]
    async fn test_sequential_run_passes_context() {
        let (gateway, uc) = use_case(
            ScriptedGateway::replying(&["first draft", "polished draft"]),
            MockToolExecutor::new().with_output("web_search", "search notes"),
        );

        let output = uc
            .execute(KickoffCrewInput::new(two_step_crew(), Model::default()).with_query("topic"))
            .await
            .unwrap();

        assert_eq!(output.len(), 2);
        assert_eq!(output.final_output(), "polished draft");

        let prompts = gateway.prompts();
        assert!(prompts[0].contains("Write a draft"));
        assert!(prompts[0].contains("search notes"));
        assert!(prompts[1].contains("first draft"));
        assert!(!prompts[1].contains("search notes"));

        let systems = gateway.system_prompts();
        assert!(systems[0].contains("You are Writer."));
        assert!(systems[1].contains("You are Editor."));
    }

    #[tokio::test]
    async fn test_progress_events_in_order() {
        let (_, uc) = use_case(
            ScriptedGateway::replying(&["a", "b"]),
            MockToolExecutor::new(),
        );
        let log = EventLog::default();

        uc.execute_with_progress(KickoffCrewInput::new(two_step_crew(), Model::default()), &log)
            .await
            .unwrap();

        assert_eq!(
            *log.0.lock().unwrap(),
            vec!["start 2", "task 0 draft", "done 0", "task 1 edit", "done 1", "complete 2"]
        );
    }

    #[tokio::test]
    async fn test_gateway_error_aborts_crew() {
        let (gateway, uc) = use_case(
            ScriptedGateway::new(vec![Err(GatewayError::ConnectionError("refused".into()))]),
            MockToolExecutor::new(),
        );
        let log = EventLog::default();

        let err = uc
            .execute_with_progress(KickoffCrewInput::new(two_step_crew(), Model::default()), &log)
            .await
            .unwrap_err();

        match err {
            CrewError::TaskFailed { task, source } => {
                assert_eq!(task.as_str(), "draft");
                assert!(matches!(source, GatewayError::ConnectionError(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(gateway.prompts().len(), 1);
        assert_eq!(log.0.lock().unwrap().last().unwrap(), "failed 0");
    }

    #[tokio::test]
    async fn test_empty_response_is_an_error() {
        let (_, uc) = use_case(ScriptedGateway::replying(&["  \n"]), MockToolExecutor::new());

        let err = uc
            .execute(KickoffCrewInput::new(two_step_crew(), Model::default()))
            .await
            .unwrap_err();

        assert!(matches!(err, CrewError::EmptyResponse(ref id) if id.as_str() == "draft"));
    }

    #[tokio::test]
    async fn test_tools_disabled_by_params() {
        let tools = Arc::new(MockToolExecutor::new().with_output("web_search", "notes"));
        let gateway = Arc::new(ScriptedGateway::replying(&["a", "b"]));
        let uc = KickoffCrewUseCase::new(gateway.clone(), tools.clone())
            .with_params(KickoffParams::default().with_tools(false));

        uc.execute(KickoffCrewInput::new(two_step_crew(), Model::default()))
            .await
            .unwrap();

        assert_eq!(tools.call_count(), 0);
        assert!(!gateway.prompts()[0].contains("notes"));
    }

    #[tokio::test]
    async fn test_tool_query_falls_back_to_description() {
        let tools = Arc::new(MockToolExecutor::new().with_output("web_search", "notes"));
        let gateway = Arc::new(ScriptedGateway::replying(&["a", "b"]));
        let uc = KickoffCrewUseCase::new(gateway, tools.clone());

        uc.execute(KickoffCrewInput::new(two_step_crew(), Model::default()))
            .await
            .unwrap();

        assert_eq!(tools.calls.lock().unwrap()[0].query, "Write a draft");
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let (gateway, uc) = use_case(ScriptedGateway::replying(&["a"]), MockToolExecutor::new());
        let uc = uc.with_cancellation(token);

        let err = uc
            .execute(KickoffCrewInput::new(two_step_crew(), Model::default()))
            .await
            .unwrap_err();

        assert!(matches!(err, CrewError::Cancelled));
        assert!(gateway.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_send() {
        let token = CancellationToken::new();
        let (_, uc) = use_case(
            ScriptedGateway::replying(&["late"]).with_delay(Duration::from_secs(30)),
            MockToolExecutor::new(),
        );
        let uc = uc.with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let err = uc
            .execute(KickoffCrewInput::new(two_step_crew(), Model::default()))
            .await
            .unwrap_err();
        canceller.await.unwrap();

        assert!(matches!(err, CrewError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_reference_gathering() {
        let token = CancellationToken::new();
        let (gateway, uc) = use_case(
            ScriptedGateway::replying(&["a", "b"]),
            MockToolExecutor::new()
                .with_output("web_search", "slow notes")
                .with_delay(Duration::from_secs(30)),
        );
        let uc = uc.with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let err = tokio::time::timeout(
            Duration::from_secs(5),
            uc.execute(KickoffCrewInput::new(two_step_crew(), Model::default())),
        )
        .await
        .expect("cancellation should not wait for the tool")
        .unwrap_err();
        canceller.await.unwrap();

        assert!(matches!(err, CrewError::Cancelled));
        assert!(gateway.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_task_timeout() {
        let (_, uc) = use_case(
            ScriptedGateway::replying(&["late"]).with_delay(Duration::from_secs(30)),
            MockToolExecutor::new(),
        );
        let uc = uc.with_params(
            KickoffParams::default().with_task_timeout(Some(Duration::from_millis(20))),
        );

        let err = uc
            .execute(KickoffCrewInput::new(two_step_crew(), Model::default()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CrewError::TaskFailed {
                source: GatewayError::Timeout,
                ..
            }
        ));
    }
}
