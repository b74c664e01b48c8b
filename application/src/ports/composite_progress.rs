//! Composite progress notifier: delegates to multiple notifiers.
//!
//! Used to fan out crew lifecycle events to the console reporter and the
//! transcript recorder simultaneously.

use super::progress::CrewProgressNotifier;
use crew_domain::{AgentRole, CrewOutput, TaskOutput, TaskSpec, ToolResult};

/// A progress notifier that delegates to multiple inner notifiers.
///
/// ```text
/// KickoffCrewUseCase.execute(crew, &composite)
///                                  |
///          +-----------------------+----------------------+
///          |                                              |
///  ProgressReporter (console)                  TranscriptRecorder
///  -> spinner / lines                          -> captured output
/// ```
pub struct CompositeProgress<'a> {
    delegates: Vec<&'a dyn CrewProgressNotifier>,
}

impl<'a> CompositeProgress<'a> {
    pub fn new(delegates: Vec<&'a dyn CrewProgressNotifier>) -> Self {
        Self { delegates }
    }
}

/// Macro to delegate a method call to all inner notifiers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl CrewProgressNotifier for CompositeProgress<'_> {
    fn on_crew_start(&self, total_tasks: usize) {
        delegate!(self, on_crew_start, total_tasks);
    }

    fn on_task_start(&self, index: usize, task: &TaskSpec, agent: &AgentRole) {
        delegate!(self, on_task_start, index, task, agent);
    }

    fn on_tool_result(&self, agent: &AgentRole, result: &ToolResult) {
        delegate!(self, on_tool_result, agent, result);
    }

    fn on_task_complete(&self, index: usize, output: &TaskOutput) {
        delegate!(self, on_task_complete, index, output);
    }

    fn on_task_failed(&self, index: usize, error: &str) {
        delegate!(self, on_task_failed, index, error);
    }

    fn on_crew_complete(&self, output: &CrewOutput) {
        delegate!(self, on_crew_complete, output);
    }
}
