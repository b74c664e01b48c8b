//! Free-form input handed to a use case

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the free-text query every use case accepts.
pub const QUERY_KEY: &str = "query";

/// Mapping of input names to JSON values.
///
/// Every use case reads `query`; some read extra keys such as
/// `transaction_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UseCaseInput(Map<String, Value>);

impl UseCaseInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_query(query: impl Into<String>) -> Self {
        Self::new().with(QUERY_KEY, Value::String(query.into()))
    }

    /// Parse a JSON object. Anything other than an object is rejected.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("malformed JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::InvalidInput(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Entries of `other` overwrite entries of `self`.
    pub fn merge(&mut self, other: UseCaseInput) {
        self.0.extend(other.0);
    }

    /// The `query` string, or `""` when absent or not a string.
    pub fn query(&self) -> &str {
        self.0.get(QUERY_KEY).and_then(Value::as_str).unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// First present key among `keys`
    pub fn first_of(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|k| self.0.get(*k))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
