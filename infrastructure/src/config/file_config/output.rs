//! `[output]` section: how `crew-hub run` prints its record

use crew_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Used when `--output` is not given
    pub format: Option<OutputFormat>,
    /// `false` turns off ANSI colors everywhere
    pub color: bool,
}

impl FileOutputConfig {
    /// `--output` wins, then `[output] format`, then `result`.
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format_precedence() {
        let unset = FileOutputConfig::default();
        assert_eq!(unset.resolve_format(None), OutputFormat::Result);

        let configured = FileOutputConfig {
            format: Some(OutputFormat::Full),
            ..Default::default()
        };
        assert_eq!(configured.resolve_format(None), OutputFormat::Full);
        assert_eq!(
            configured.resolve_format(Some(OutputFormat::Json)),
            OutputFormat::Json
        );
    }
}
