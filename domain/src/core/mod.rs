//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the locally served model used by every agent
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
