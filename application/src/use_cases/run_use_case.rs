//! Run Use Case use case
//!
//! The dispatcher behind the hub: resolve a use case by id, build its crew
//! from the input, kick it off while recording the transcript, and fold
//! the outcome into a [`RunRecord`].

use crate::config::KickoffParams;
use crate::ports::composite_progress::CompositeProgress;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{CrewProgressNotifier, NoCrewProgress};
use crate::ports::run_logger::{NoRunLogger, RunEvent, RunLogger};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::kickoff_crew::{CrewError, KickoffCrewInput, KickoffCrewUseCase};
use crate::use_cases::registry::UseCaseRegistry;
use crate::use_cases::transcript::TranscriptRecorder;
use crew_domain::{CrewOutput, DomainError, Model, RunRecord, UseCaseContext, UseCaseInput};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that can occur while running a use case
#[derive(Error, Debug)]
pub enum RunUseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Crew(#[from] CrewError),
}

/// Successful run: the crew's outputs and the recorded transcript
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output: CrewOutput,
    pub transcript: String,
}

/// Use case for running any registered use case by id
pub struct RunUseCaseUseCase<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> {
    registry: Arc<UseCaseRegistry>,
    gateway: Arc<G>,
    tool_executor: Arc<T>,
    model: Model,
    params: KickoffParams,
    run_logger: Arc<dyn RunLogger>,
}

impl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> RunUseCaseUseCase<G, T> {
    pub fn new(registry: Arc<UseCaseRegistry>, gateway: Arc<G>, tool_executor: Arc<T>) -> Self {
        Self {
            registry,
            gateway,
            tool_executor,
            model: Model::default(),
            params: KickoffParams::default(),
            run_logger: Arc::new(NoRunLogger),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_params(mut self, params: KickoffParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_run_logger(mut self, logger: Arc<dyn RunLogger>) -> Self {
        self.run_logger = logger;
        self
    }

    pub fn registry(&self) -> &UseCaseRegistry {
        &self.registry
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Run `id` and capture the outcome as a record. Never fails.
    pub async fn run(&self, id: &str, input: UseCaseInput) -> RunRecord {
        self.run_with_progress(id, input, &NoCrewProgress, None).await
    }

    /// Like [`run`](Self::run), forwarding progress and honouring `cancel`.
    pub async fn run_with_progress(
        &self,
        id: &str,
        input: UseCaseInput,
        progress: &dyn CrewProgressNotifier,
        cancel: Option<CancellationToken>,
    ) -> RunRecord {
        let record = match self.try_run(id, input, progress, cancel).await {
            Ok(outcome) => RunRecord::succeeded(outcome.output.final_output(), outcome.transcript),
            Err(e) => {
                warn!("Use case {} failed: {}", id, e);
                RunRecord::from_error(&e)
            }
        };

        self.run_logger.log(RunEvent::new(
            "run_complete",
            json!({ "use_case": id, "record": record }),
        ));
        record
    }

    /// Run `id`, returning the typed error on failure.
    pub async fn try_run(
        &self,
        id: &str,
        input: UseCaseInput,
        progress: &dyn CrewProgressNotifier,
        cancel: Option<CancellationToken>,
    ) -> Result<RunOutcome, RunUseCaseError> {
        let use_case = self
            .registry
            .get(id)
            .ok_or_else(|| DomainError::UnknownUseCase(id.to_string()))?;

        info!("Running use case {} with model {}", id, self.model);
        self.run_logger.log(RunEvent::new(
            "run_start",
            json!({ "use_case": id, "model": self.model.as_str(), "input": input }),
        ));

        let tools: Vec<&str> = if self.params.use_tools {
            self.tool_executor.available_tools()
        } else {
            Vec::new()
        };
        let ctx = UseCaseContext::new(self.model.clone()).with_tools(tools);
        let crew = use_case.setup_crew(&ctx, &input)?;

        let mut kickoff =
            KickoffCrewUseCase::new(Arc::clone(&self.gateway), Arc::clone(&self.tool_executor))
                .with_params(self.params.clone())
                .with_run_logger(Arc::clone(&self.run_logger));
        if let Some(token) = cancel {
            kickoff = kickoff.with_cancellation(token);
        }

        let recorder = TranscriptRecorder::new();
        let composite = CompositeProgress::new(vec![progress, &recorder]);
        let kickoff_input =
            KickoffCrewInput::new(crew, self.model.clone()).with_query(input.query());

        let output = kickoff.execute_with_progress(kickoff_input, &composite).await?;

        Ok(RunOutcome {
            output,
            transcript: recorder.transcript(),
        })
    }
}
