//! Research tool port
//!
//! Agents equipped with tools get reference material before they answer.
//! The executor decides which tools exist; agents only name them.

use async_trait::async_trait;
use crew_domain::{ToolCall, ToolDefinition, ToolResult, ToolSpec};

#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Tools this executor can run
    fn tool_spec(&self) -> &ToolSpec;

    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().contains(name)
    }

    fn definition(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Registered tool names, sorted
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Run one call. Never fails: errors come back as a failed [`ToolResult`].
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
