//! Model value object representing a locally served LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the model served by the local runtime.
pub const DEFAULT_MODEL: &str = "llama3";

/// A model served by the local model runtime (Value Object)
///
/// Local runtimes address models by tag (`llama3`, `mistral:7b`,
/// `qwen2.5:14b-instruct`), so the value object is an opaque name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Model family without the tag (`mistral:7b` -> `mistral`)
    pub fn family(&self) -> &str {
        self.0.split(':').next().unwrap_or(&self.0)
    }

    /// Whether `other` refers to the same model, treating a missing tag as `latest`.
    pub fn matches(&self, other: &str) -> bool {
        fn normalize(s: &str) -> (&str, &str) {
            match s.split_once(':') {
                Some((name, tag)) => (name, tag),
                None => (s, "latest"),
            }
        }
        normalize(&self.0) == normalize(other)
    }
}

impl Default for Model {
    fn default() -> Self {
        Model(DEFAULT_MODEL.to_string())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("model name cannot be empty".to_string());
        }
        Ok(Model(trimmed.to_string()))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "llama3");
    }

    #[test]
    fn test_model_parse_trims() {
        let model: Model = "  mistral:7b ".parse().unwrap();
        assert_eq!(model.as_str(), "mistral:7b");
        assert_eq!(model.family(), "mistral");
    }

    #[test]
    fn test_model_parse_rejects_empty() {
        assert!("   ".parse::<Model>().is_err());
    }

    #[test]
    fn test_model_matches_latest_tag() {
        let model = Model::new("llama3");
        assert!(model.matches("llama3:latest"));
        assert!(model.matches("llama3"));
        assert!(!model.matches("llama3:70b"));
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::new("phi3")).unwrap();
        assert_eq!(json, "\"phi3\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::new("phi3"));
        assert!(serde_json::from_str::<Model>("\"\"").is_err());
    }
}
