//! Ollama chat session
//!
//! Implements `LlmSession` over the stateless chat endpoint by keeping the
//! conversation locally.

use super::client::OllamaClient;
use super::types::ChatMessage;
use async_trait::async_trait;
use crew_application::ports::llm_gateway::{GatewayError, LlmSession};
use crew_domain::Model;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct OllamaSession {
    client: Arc<OllamaClient>,
    model: Model,
    /// Conversation so far, system prompt first
    history: Mutex<Vec<ChatMessage>>,
}

impl OllamaSession {
    pub fn new(client: Arc<OllamaClient>, model: Model, system_prompt: Option<&str>) -> Self {
        let history = match system_prompt {
            Some(prompt) if !prompt.trim().is_empty() => vec![ChatMessage::system(prompt)],
            _ => Vec::new(),
        };
        Self {
            client,
            model,
            history: Mutex::new(history),
        }
    }
}

#[async_trait]
impl LlmSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut history = self.history.lock().await;
        history.push(ChatMessage::user(content));

        match self.client.chat(self.model.as_str(), &history).await {
            Ok(reply) => {
                history.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                // A failed turn leaves no trace in the conversation.
                history.pop();
                Err(e)
            }
        }
    }
}
