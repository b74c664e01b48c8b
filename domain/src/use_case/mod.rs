//! Use case subdomain: the scenarios the hub can run.
//!
//! - [`traits::UseCase`]: hooks that build a crew from input
//! - [`metadata::UseCaseMetadata`]: what the hub lists
//! - [`input::UseCaseInput`]: free-form JSON input
//! - [`record::RunRecord`]: outcome surfaced to the user

pub mod category;
pub mod input;
pub mod metadata;
pub mod record;
pub mod traits;
