//! Application layer for crew-hub
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::KickoffParams;
pub use ports::{
    composite_progress::CompositeProgress,
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    metadata_source::{NoMetadataSource, UseCaseMetadataSource},
    progress::{CrewProgressNotifier, NoCrewProgress},
    run_logger::{NoRunLogger, RunEvent, RunLogger},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::gather_references::GatherReferencesUseCase;
pub use use_cases::kickoff_crew::{CrewError, KickoffCrewInput, KickoffCrewUseCase};
pub use use_cases::registry::UseCaseRegistry;
pub use use_cases::run_use_case::{RunOutcome, RunUseCaseError, RunUseCaseUseCase};
pub use use_cases::transcript::TranscriptRecorder;
