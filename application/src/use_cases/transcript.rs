//! Transcript recording: the verbose log of a crew run as text.

use crate::ports::progress::CrewProgressNotifier;
use crew_domain::{AgentRole, CrewOutput, TaskOutput, TaskSpec, ToolResult};
use std::fmt::Write;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    buffer: String,
    /// Whether the running task's agent is verbose
    verbose: bool,
}

/// Progress notifier that writes agent and task banners into a buffer.
///
/// Agents created with `verbose = false` leave no trace except failures.
#[derive(Default)]
pub struct TranscriptRecorder {
    state: Mutex<State>,
}

impl TranscriptRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn transcript(&self) -> String {
        self.state
            .lock()
            .map(|s| s.buffer.clone())
            .unwrap_or_default()
    }

    fn record(&self, f: impl FnOnce(&mut State)) {
        if let Ok(mut state) = self.state.lock() {
            f(&mut state);
        }
    }
}

impl CrewProgressNotifier for TranscriptRecorder {
    fn on_crew_start(&self, total_tasks: usize) {
        self.record(|s| {
            let _ = writeln!(s.buffer, "Crew started with {total_tasks} task(s)\n");
        });
    }

    fn on_task_start(&self, index: usize, task: &TaskSpec, agent: &AgentRole) {
        self.record(|s| {
            s.verbose = agent.verbose;
            if s.verbose {
                let _ = writeln!(
                    s.buffer,
                    "# Agent: {}\n## Task {}: {}\n",
                    agent.role,
                    index + 1,
                    task.description
                );
            }
        });
    }

    fn on_tool_result(&self, agent: &AgentRole, result: &ToolResult) {
        self.record(|s| {
            if !agent.verbose {
                return;
            }
            let status = if result.is_success() { "ok" } else { "failed" };
            let _ = match result.duration_ms {
                Some(ms) => writeln!(
                    s.buffer,
                    "# Agent: {}\n## Used tool: {} ({}, {} ms)\n",
                    agent.role, result.tool_name, status, ms
                ),
                None => writeln!(
                    s.buffer,
                    "# Agent: {}\n## Used tool: {} ({})\n",
                    agent.role, result.tool_name, status
                ),
            };
        });
    }

    fn on_task_complete(&self, _index: usize, output: &TaskOutput) {
        self.record(|s| {
            if s.verbose {
                let _ = writeln!(
                    s.buffer,
                    "# Agent: {}\n## Final Answer:\n{}\n",
                    output.agent_role, output.raw
                );
            }
        });
    }

    fn on_task_failed(&self, index: usize, error: &str) {
        self.record(|s| {
            let _ = writeln!(s.buffer, "Task {} failed: {}\n", index + 1, error);
        });
    }

    fn on_crew_complete(&self, output: &CrewOutput) {
        self.record(|s| {
            let _ = writeln!(s.buffer, "Crew finished: {} task(s) completed", output.len());
        });
    }
}
