//! Auxiliary tools agents consult before answering (web search, encyclopedia).
//!
//! The domain only describes tools; executors live in the infrastructure layer.

pub mod entities;
pub mod value_objects;
