//! Crew subdomain: agents, tasks and the crews that sequence them.
//!
//! A [`Crew`](crew::Crew) is validated once at construction; the execution
//! engine in the application layer relies on its invariants (every task has
//! an agent, every context dependency already ran).

pub mod agent;
#[allow(clippy::module_inception)]
pub mod crew;
pub mod output;
pub mod task;
