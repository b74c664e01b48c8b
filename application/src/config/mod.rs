//! Application-level configuration.
//!
//! - [`KickoffParams`]: crew execution control (timeouts, tool budget)

pub mod kickoff_params;

pub use kickoff_params::KickoffParams;
