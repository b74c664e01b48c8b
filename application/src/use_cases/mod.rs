//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod gather_references;
pub mod kickoff_crew;
pub mod registry;
pub mod run_use_case;
pub mod transcript;

#[cfg(test)]
pub(crate) mod test_support;
