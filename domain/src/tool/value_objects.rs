//! What a tool run produces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a tool run produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolErrorCode {
    /// The executor has no tool by that name
    NotFound,
    /// Missing or blank query
    InvalidArgument,
    /// HTTP or parse failure
    ExecutionFailed,
    Timeout,
}

impl ToolErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolErrorCode::NotFound => "NOT_FOUND",
            ToolErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ToolErrorCode::ExecutionFailed => "EXECUTION_FAILED",
            ToolErrorCode::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for ToolErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed tool run, shown as `[CODE] message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: ToolErrorCode,
    pub message: String,
}

impl ToolError {
    pub fn new(code: ToolErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::new(
            ToolErrorCode::NotFound,
            format!("Tool not found: {}", tool.into()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::InvalidArgument, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::ExecutionFailed, message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            ToolErrorCode::Timeout,
            format!("{} did not answer in time", operation.into()),
        )
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Outcome of one tool call. Exactly one of `output` / `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Wall-clock time, filled in by whoever timed the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: Some(output.into()),
            error: None,
            duration_ms: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: None,
            error: Some(error),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let result = ToolResult::success("web_search", "found it").with_duration(12);
        assert!(result.is_success());
        assert_eq!(result.output(), Some("found it"));
        assert_eq!(result.duration_ms, Some(12));
        assert!(result.error().is_none());
    }

    #[test]
    fn test_failure_result() {
        let result = ToolResult::failure("nope", ToolError::not_found("nope"));
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, ToolErrorCode::NotFound);
        assert_eq!(
            result.error().unwrap().to_string(),
            "[NOT_FOUND] Tool not found: nope"
        );
    }

    #[test]
    fn test_code_serializes_screaming() {
        let json = serde_json::to_value(ToolError::timeout("wikipedia")).unwrap();
        assert_eq!(json["code"], "TIMEOUT");
        assert_eq!(json["message"], "wikipedia did not answer in time");
    }
}
