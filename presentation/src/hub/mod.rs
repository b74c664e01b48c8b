//! Interactive use case hub

pub mod repl;
pub mod state;

pub use repl::{HubReply, HubRepl};
pub use state::{HubCommand, HubState};
