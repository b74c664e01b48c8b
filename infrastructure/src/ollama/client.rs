//! Thin HTTP client over the Ollama REST API

use super::types::{ChatMessage, ChatRequest, ChatResponse, TagsResponse};
use crew_application::ports::llm_gateway::GatewayError;
use crew_domain::core::string::truncate_with_ellipsis;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Where `ollama serve` listens by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Per-request timeout; local models can take a while on long prompts.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Error bodies are cut to this many characters in messages.
const MAX_ERROR_BODY: usize = 300;

/// Shared connection to one Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::RequestFailed(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send the whole conversation and return the assistant's reply.
    pub async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, GatewayError> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(model, messages = messages.len(), "Calling Ollama chat");

        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(status_error(status, &body, model));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::InvalidResponse(format!(
                "{}: {}",
                e,
                truncate_with_ellipsis(&body, MAX_ERROR_BODY)
            ))
        })?;

        if let Some(error) = parsed.error {
            return Err(GatewayError::RequestFailed(error));
        }

        parsed
            .message
            .map(|m| m.content)
            .ok_or_else(|| GatewayError::InvalidResponse("response has no message".to_string()))
    }

    /// Names of the models installed on the server.
    pub async fn tags(&self) -> Result<Vec<String>, GatewayError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(status_error(status, &body, ""));
        }

        let tags: TagsResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::ConnectionError(format!("{}: {}", self.base_url, e))
        } else {
            GatewayError::RequestFailed(e.to_string())
        }
    }
}

/// Map a non-2xx reply. Ollama error bodies look like `{"error": ".."}`.
fn status_error(status: StatusCode, body: &str, model: &str) -> GatewayError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"].as_str().map(str::to_string))
        .unwrap_or_else(|| truncate_with_ellipsis(body.trim(), MAX_ERROR_BODY));

    if status == StatusCode::NOT_FOUND && message.contains("not found") {
        GatewayError::ModelNotAvailable(format!("{}: {}", model, message))
    } else {
        GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn test_status_error_model_missing() {
        let err = status_error(
            StatusCode::NOT_FOUND,
            r#"{"error":"model \"llama9\" not found, try pulling it first"}"#,
            "llama9",
        );
        assert!(matches!(err, GatewayError::ModelNotAvailable(m) if m.starts_with("llama9: model")));
    }

    #[test]
    fn test_status_error_plain_body() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom\n", "llama3");
        assert!(matches!(err, GatewayError::RequestFailed(m) if m == "HTTP 500: boom"));
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let (base_url, server) = test_server::serve(vec![(
            200,
            r#"{"message":{"role":"assistant","content":"Pong"},"done":true}"#.to_string(),
        )])
        .await;
        let client = OllamaClient::new(base_url, DEFAULT_TIMEOUT).unwrap();

        let reply = client
            .chat("llama3", &[ChatMessage::user("Ping")])
            .await
            .unwrap();

        assert_eq!(reply, "Pong");
        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("POST /api/chat"));
        assert!(requests[0].contains(r#""stream":false"#));
        assert!(requests[0].contains(r#""content":"Ping""#));
    }

    #[tokio::test]
    async fn test_chat_unparsable_body() {
        let (base_url, _server) = test_server::serve(vec![(200, "not json".to_string())]).await;
        let client = OllamaClient::new(base_url, DEFAULT_TIMEOUT).unwrap();

        let err = client.chat("llama3", &[ChatMessage::user("x")]).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let base_url = test_server::unused_address().await;
        let client = OllamaClient::new(base_url, DEFAULT_TIMEOUT).unwrap();

        let err = client.tags().await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let base_url = test_server::silent().await;
        let client = OllamaClient::new(base_url, Duration::from_millis(200)).unwrap();

        let err = client.chat("llama3", &[ChatMessage::user("x")]).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
    }
}
