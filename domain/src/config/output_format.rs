//! Output format value object

use serde::{Deserialize, Serialize};

/// How a run record is rendered on the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the crew's final answer (default)
    #[default]
    Result,
    /// The answer followed by the raw agent transcript
    Full,
    /// The record as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "result" => Ok(OutputFormat::Result),
            "full" | "raw" => Ok(OutputFormat::Full),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_result() {
        assert_eq!(OutputFormat::default(), OutputFormat::Result);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_parse() {
        assert_eq!("RAW".parse(), Ok(OutputFormat::Full));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
