//! Local tool executor, the concrete implementation of [`ToolExecutorPort`].
//!
//! Holds one shared `reqwest::Client` for the web tools and dispatches
//! calls by canonical tool name. Without the `web-tools` feature the tool set
//! is empty and every call reports `NOT_FOUND`.

use async_trait::async_trait;
use crew_application::ports::tool_executor::ToolExecutorPort;
use crew_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

#[cfg(feature = "web-tools")]
use super::web;

/// Timeout applied to every outbound tool request.
#[cfg(feature = "web-tools")]
const TOOL_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Wikipedia rejects requests without a descriptive agent.
#[cfg(feature = "web-tools")]
const USER_AGENT: &str = concat!("crew-hub/", env!("CARGO_PKG_VERSION"), " (research tool)");

/// Executor that runs tools from this process.
#[derive(Debug, Clone)]
pub struct LocalToolExecutor {
    tool_spec: ToolSpec,
    #[cfg(feature = "web-tools")]
    http_client: reqwest::Client,
}

impl LocalToolExecutor {
    /// Executor with every tool compiled in.
    pub fn new() -> Self {
        Self::with_tools(super::default_tool_spec())
    }

    /// Executor restricted to `tool_spec`.
    pub fn with_tools(tool_spec: ToolSpec) -> Self {
        Self {
            tool_spec,
            #[cfg(feature = "web-tools")]
            http_client: http_client(),
        }
    }
}

impl Default for LocalToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "web-tools")]
fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(TOOL_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client for tools: {}", e);
            reqwest::Client::new()
        })
}

#[async_trait]
impl ToolExecutorPort for LocalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        if !self.tool_spec.contains(&call.tool_name) {
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        }

        match call.tool_name.as_str() {
            #[cfg(feature = "web-tools")]
            web::WEB_SEARCH => web::execute_web_search(&self.http_client, call).await,
            #[cfg(feature = "web-tools")]
            web::WIKIPEDIA => web::execute_wikipedia(&self.http_client, call).await,
            other => ToolResult::failure(other, ToolError::not_found(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_domain::ToolErrorCode;

    #[tokio::test]
    async fn test_unknown_tool_not_found() {
        let executor = LocalToolExecutor::new();
        let result = executor.execute(&ToolCall::new("telepathy", "q")).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, ToolErrorCode::NotFound);
        assert_eq!(result.tool_name, "telepathy");
    }

    #[tokio::test]
    async fn test_restricted_spec_hides_tools() {
        let executor = LocalToolExecutor::with_tools(ToolSpec::new());
        assert!(executor.available_tools().is_empty());

        let result = executor.execute(&ToolCall::new("web_search", "q")).await;
        assert_eq!(result.error().unwrap().code, ToolErrorCode::NotFound);
    }

    #[cfg(feature = "web-tools")]
    #[test]
    fn test_default_spec_lists_web_tools() {
        let executor = LocalToolExecutor::new();
        assert_eq!(executor.available_tools(), vec!["web_search", "wikipedia"]);
        assert!(executor.definition("wikipedia").is_some());
    }

    #[cfg(feature = "web-tools")]
    #[tokio::test]
    async fn test_blank_query_is_invalid_argument() {
        let executor = LocalToolExecutor::new();
        let result = executor.execute(&ToolCall::new("wikipedia", "")).await;
        assert_eq!(result.error().unwrap().code, ToolErrorCode::InvalidArgument);
    }
}
