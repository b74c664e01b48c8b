//! Ports (interfaces) for external adapters
//!
//! These traits define the boundaries between the application layer
//! and infrastructure/presentation layers.

pub mod composite_progress;
pub mod llm_gateway;
pub mod metadata_source;
pub mod progress;
pub mod run_logger;
pub mod tool_executor;
