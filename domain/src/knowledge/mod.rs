//! Toy knowledge graphs for research assistance.
//!
//! [`KnowledgeGraph`] keeps documents, keywords, researchers and datasets in
//! one undirected graph; [`Showcase`] runs the canned demonstrations.

pub mod graph;
pub mod operations;
pub mod showcase;

pub use graph::{KnowledgeGraph, Node, NodeKind};
pub use operations::{Collaboration, DataEntry, Document};
pub use showcase::{Showcase, ShowcaseReport};
