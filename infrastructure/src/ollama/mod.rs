//! Ollama adapter for the [`LlmGateway`](crew_application::LlmGateway) port.
//!
//! Talks to a local Ollama server over its REST API:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | chat (non-streaming) | `POST {base_url}/api/chat` |
//! | installed models | `GET {base_url}/api/tags` |
//!
//! The chat endpoint is stateless, so [`OllamaSession`] keeps the exchange
//! history and resends it with every message.

mod client;
mod gateway;
mod session;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OllamaClient};
pub use gateway::OllamaLlmGateway;
pub use session::OllamaSession;
