//! Ollama LLM gateway implementation

use super::client::OllamaClient;
use super::session::OllamaSession;
use async_trait::async_trait;
use crew_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crew_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// LLM gateway backed by a local Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaLlmGateway {
    client: Arc<OllamaClient>,
}

impl OllamaLlmGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = OllamaClient::new(base_url, timeout)?;
        info!("Using Ollama at {}", client.base_url());
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: OllamaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn open_session(
        &self,
        model: &Model,
        persona: Option<&str>,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OllamaSession::new(
            Arc::clone(&self.client),
            model.clone(),
            persona,
        )))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        let names = self.client.tags().await?;
        Ok(names.into_iter().map(Model::new).collect())
    }
}
