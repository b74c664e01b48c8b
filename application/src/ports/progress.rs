//! Progress notification port
//!
//! Defines the interface for reporting progress while a crew runs.

use crew_domain::{AgentRole, CrewOutput, TaskOutput, TaskSpec, ToolResult};

/// Callback for progress updates during crew execution
///
/// Implementations live in the presentation layer (spinners, plain lines)
/// or in the application layer itself ([`TranscriptRecorder`]).
/// Every method defaults to a no-op.
///
/// [`TranscriptRecorder`]: crate::use_cases::transcript::TranscriptRecorder
pub trait CrewProgressNotifier: Send + Sync {
    /// Called once before the first task
    fn on_crew_start(&self, _total_tasks: usize) {}

    /// Called when a task begins (`index` is zero-based)
    fn on_task_start(&self, _index: usize, _task: &TaskSpec, _agent: &AgentRole) {}

    /// Called for every tool an agent consulted
    fn on_tool_result(&self, _agent: &AgentRole, _result: &ToolResult) {}

    /// Called when a task produced its output
    fn on_task_complete(&self, _index: usize, _output: &TaskOutput) {}

    /// Called when a task aborted the crew
    fn on_task_failed(&self, _index: usize, _error: &str) {}

    /// Called after the last task succeeded
    fn on_crew_complete(&self, _output: &CrewOutput) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoCrewProgress;

impl CrewProgressNotifier for NoCrewProgress {}
