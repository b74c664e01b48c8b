//! Progress reporting for crew execution

use colored::Colorize;
use crew_application::ports::progress::CrewProgressNotifier;
use crew_domain::{AgentRole, CrewOutput, TaskOutput, TaskSpec, ToolResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports crew progress with a bar over the task list
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn crew_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CrewProgressNotifier for ProgressReporter {
    fn on_crew_start(&self, total_tasks: usize) {
        let bar = ProgressBar::new(total_tasks as u64);
        bar.set_style(Self::crew_style());
        bar.set_prefix("Crew");
        bar.set_message("Starting...");
        bar.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_task_start(&self, _index: usize, _task: &TaskSpec, agent: &AgentRole) {
        self.with_bar(|bar| bar.set_message(format!("{} working...", agent.role)));
    }

    fn on_tool_result(&self, agent: &AgentRole, result: &ToolResult) {
        let status = if result.is_success() {
            "v".green()
        } else {
            "x".red()
        };
        self.with_bar(|bar| {
            bar.set_message(format!("{} {} {}", agent.role, status, result.tool_name))
        });
    }

    fn on_task_complete(&self, _index: usize, output: &TaskOutput) {
        self.with_bar(|bar| {
            bar.set_message(format!("{} {}", "v".green(), output.agent_role));
            bar.inc(1);
        });
    }

    fn on_task_failed(&self, _index: usize, error: &str) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.abandon_with_message(format!("{} {}", "x".red(), error));
        }
    }

    fn on_crew_complete(&self, _output: &CrewOutput) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_with_message(format!("{}", "Crew complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl CrewProgressNotifier for SimpleProgress {
    fn on_crew_start(&self, total_tasks: usize) {
        println!("{} {} ({} tasks)", "->".cyan(), "Crew started".bold(), total_tasks);
    }

    fn on_task_start(&self, index: usize, task: &TaskSpec, agent: &AgentRole) {
        println!("  {} [{}] {}: {}", "->".cyan(), index + 1, agent.role.bold(), task.id);
    }

    fn on_tool_result(&self, _agent: &AgentRole, result: &ToolResult) {
        if result.is_success() {
            println!("     {} {}", "v".green(), result.tool_name);
        } else {
            println!("     {} {} (failed)", "x".red(), result.tool_name);
        }
    }

    fn on_task_complete(&self, _index: usize, output: &TaskOutput) {
        println!("  {} {}", "v".green(), output.agent_role);
    }

    fn on_task_failed(&self, index: usize, error: &str) {
        println!("  {} task {} failed: {}", "x".red(), index + 1, error);
    }

    fn on_crew_complete(&self, _output: &CrewOutput) {
        println!();
    }
}
