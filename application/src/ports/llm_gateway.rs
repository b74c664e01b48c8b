//! Model server port
//!
//! Every task opens its own conversation with the model. The agent's
//! persona travels as the system message; the task prompt is the first
//! user turn.

use async_trait::async_trait;
use crew_domain::Model;
use thiserror::Error;

/// Failures talking to the model server
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Server unreachable (refused, DNS, TLS)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server answered but does not have the model
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Non-success status or a client-side request failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    /// Body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Opens conversations with a model server.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Start a conversation with `model`. `persona` becomes the system
    /// message; `None` or a blank persona sends none.
    async fn open_session(
        &self,
        model: &Model,
        persona: Option<&str>,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Models installed on the server
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// One conversation. Each `send` sees the earlier exchanges.
#[async_trait]
pub trait LlmSession: Send + Sync {
    fn model(&self) -> &Model;

    /// Send a user turn and wait for the complete reply.
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
