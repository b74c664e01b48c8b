//! Outcome of running a use case, as surfaced to the UI

use serde::{Deserialize, Serialize};

/// Either the crew's answer plus its captured transcript, or the error that
/// stopped it.
///
/// Serializes to a flat object carrying a `success` flag:
/// `{"success": true, "result": .., "output": ..}` or
/// `{"success": false, "error": .., "traceback": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireRecord", try_from = "WireRecord")]
pub enum RunRecord {
    Succeeded { result: String, output: String },
    Failed { error: String, traceback: String },
}

impl RunRecord {
    pub fn succeeded(result: impl Into<String>, output: impl Into<String>) -> Self {
        RunRecord::Succeeded {
            result: result.into(),
            output: output.into(),
        }
    }

    pub fn failed(error: impl Into<String>, traceback: impl Into<String>) -> Self {
        RunRecord::Failed {
            error: error.into(),
            traceback: traceback.into(),
        }
    }

    /// Record for an error, with its `source()` chain as the traceback.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut lines = vec![format!("Error: {}", error)];
        let mut source = error.source();
        while let Some(cause) = source {
            lines.push(format!("Caused by: {}", cause));
            source = cause.source();
        }
        Self::failed(error.to_string(), lines.join("\n"))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunRecord::Succeeded { .. })
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            RunRecord::Succeeded { result, .. } => Some(result),
            RunRecord::Failed { .. } => None,
        }
    }

    /// Captured transcript, empty for failures.
    pub fn output(&self) -> &str {
        match self {
            RunRecord::Succeeded { output, .. } => output,
            RunRecord::Failed { .. } => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RunRecord::Failed { error, .. } => Some(error),
            RunRecord::Succeeded { .. } => None,
        }
    }

    pub fn traceback(&self) -> Option<&str> {
        match self {
            RunRecord::Failed { traceback, .. } => Some(traceback),
            RunRecord::Succeeded { .. } => None,
        }
    }
}

/// Flat JSON shape of a [`RunRecord`]
#[derive(Serialize, Deserialize)]
struct WireRecord {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    traceback: Option<String>,
}

impl From<RunRecord> for WireRecord {
    fn from(record: RunRecord) -> Self {
        match record {
            RunRecord::Succeeded { result, output } => WireRecord {
                success: true,
                result: Some(result),
                output: Some(output),
                error: None,
                traceback: None,
            },
            RunRecord::Failed { error, traceback } => WireRecord {
                success: false,
                result: None,
                output: None,
                error: Some(error),
                traceback: Some(traceback),
            },
        }
    }
}

impl TryFrom<WireRecord> for RunRecord {
    type Error = String;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        if wire.success {
            Ok(RunRecord::Succeeded {
                result: wire.result.ok_or("successful record without result")?,
                output: wire.output.unwrap_or_default(),
            })
        } else {
            Ok(RunRecord::Failed {
                error: wire.error.unwrap_or_else(|| "Unknown error".to_string()),
                traceback: wire.traceback.unwrap_or_default(),
            })
        }
    }
}
