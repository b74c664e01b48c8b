//! Presentation layer for crew-hub
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive hub.

pub mod cli;
pub mod hub;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{CategoryArg, Cli, Command, OutputArg, RunArgs};
pub use hub::{HubCommand, HubReply, HubRepl, HubState};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
