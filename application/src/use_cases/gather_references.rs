//! Gather References use case.
//!
//! Before an agent with tools answers its task, every tool it is equipped
//! with is queried concurrently. Successful outputs become reference
//! material in the task prompt; failures are reported and skipped.

use crate::ports::progress::CrewProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crew_domain::core::string::truncate_with_ellipsis;
use crew_domain::{AgentRole, ToolCall, ToolResult};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Use case for collecting tool output an agent can cite.
pub struct GatherReferencesUseCase<T: ToolExecutorPort> {
    tool_executor: Arc<T>,
}

impl<T: ToolExecutorPort + 'static> GatherReferencesUseCase<T> {
    pub fn new(tool_executor: Arc<T>) -> Self {
        Self { tool_executor }
    }

    /// Query the agent's tools with `query`.
    ///
    /// Returns `None` when the agent has no usable tools or none succeeded.
    /// The combined text is cut to `max_chars` characters.
    pub async fn execute(
        &self,
        agent: &AgentRole,
        query: &str,
        max_chars: usize,
        progress: &dyn CrewProgressNotifier,
    ) -> Option<String> {
        let tools: Vec<&str> = agent
            .tools
            .iter()
            .map(String::as_str)
            .filter(|name| {
                let known = self.tool_executor.has_tool(name);
                if !known {
                    warn!("Agent '{}' lists unknown tool '{}', skipping", agent.role, name);
                }
                known
            })
            .collect();

        if tools.is_empty() {
            return None;
        }

        debug!("Agent '{}' consulting {} tool(s)", agent.role, tools.len());

        let calls: Vec<ToolCall> = tools.iter().map(|name| ToolCall::new(*name, query)).collect();
        let results = join_all(calls.iter().map(|call| self.run_timed(call))).await;

        let mut sections = Vec::new();
        for result in &results {
            progress.on_tool_result(agent, result);
            match result.output() {
                Some(output) if result.is_success() && !output.trim().is_empty() => {
                    sections.push(format!("## {}\n{}", result.tool_name, output.trim()));
                }
                _ => {
                    if let Some(err) = result.error() {
                        warn!("Tool '{}' failed: {}", result.tool_name, err);
                    }
                }
            }
        }

        if sections.is_empty() {
            return None;
        }

        Some(truncate_with_ellipsis(&sections.join("\n\n"), max_chars))
    }

    async fn run_timed(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();
        let result = self.tool_executor.execute(call).await;
        if result.duration_ms.is_some() {
            result
        } else {
            result.with_duration(started.elapsed().as_millis() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoCrewProgress;
    use crate::use_cases::test_support::MockToolExecutor;
    use std::sync::Mutex;

    struct ToolLog(Mutex<Vec<(String, bool)>>);

    impl CrewProgressNotifier for ToolLog {
        fn on_tool_result(&self, _agent: &AgentRole, result: &ToolResult) {
            self.0
                .lock()
                .unwrap()
                .push((result.tool_name.clone(), result.is_success()));
        }
    }

    fn agent_with(tools: &[&str]) -> AgentRole {
        AgentRole::new("a", "Analyst", "Analyze", "Careful").with_tools(tools.iter().copied())
    }

    #[tokio::test]
    async fn test_no_tools_returns_none() {
        let executor = Arc::new(MockToolExecutor::new().with_output("web_search", "hit"));
        let use_case = GatherReferencesUseCase::new(executor.clone());

        let refs = use_case
            .execute(&agent_with(&[]), "q", 1000, &NoCrewProgress)
            .await;

        assert!(refs.is_none());
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sections_labelled_by_tool() {
        let executor = Arc::new(
            MockToolExecutor::new()
                .with_output("web_search", "search hit")
                .with_output("wikipedia", "encyclopedia hit"),
        );
        let use_case = GatherReferencesUseCase::new(executor.clone());

        let refs = use_case
            .execute(&agent_with(&["web_search", "wikipedia"]), "fraud", 1000, &NoCrewProgress)
            .await
            .unwrap();

        assert_eq!(refs, "## web_search\nsearch hit\n\n## wikipedia\nencyclopedia hit");
        let calls = executor.calls.lock().unwrap();
        assert!(calls.iter().all(|c| c.query == "fraud"));
    }

    #[tokio::test]
    async fn test_failures_skipped_and_reported() {
        let executor = Arc::new(
            MockToolExecutor::new()
                .with_failure("web_search", "offline")
                .with_output("wikipedia", "ok"),
        );
        let use_case = GatherReferencesUseCase::new(executor);
        let log = ToolLog(Mutex::new(Vec::new()));

        let refs = use_case
            .execute(&agent_with(&["web_search", "wikipedia"]), "q", 1000, &log)
            .await
            .unwrap();

        assert_eq!(refs, "## wikipedia\nok");
        let reported = log.0.lock().unwrap();
        assert_eq!(
            *reported,
            vec![("web_search".to_string(), false), ("wikipedia".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn test_unknown_tools_ignored() {
        let executor = Arc::new(MockToolExecutor::new());
        let use_case = GatherReferencesUseCase::new(executor.clone());

        let refs = use_case
            .execute(&agent_with(&["telepathy"]), "q", 1000, &NoCrewProgress)
            .await;

        assert!(refs.is_none());
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_truncated_to_budget() {
        let executor = Arc::new(MockToolExecutor::new().with_output("web_search", &"x".repeat(500)));
        let use_case = GatherReferencesUseCase::new(executor);

        let refs = use_case
            .execute(&agent_with(&["web_search"]), "q", 50, &NoCrewProgress)
            .await
            .unwrap();

        assert_eq!(refs.chars().count(), 53);
        assert!(refs.ends_with("..."));
    }
}
