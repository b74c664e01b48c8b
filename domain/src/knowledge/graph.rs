//! Label-keyed undirected graph over research artefacts.

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Attribute holding a document's text.
pub const CONTENT_ATTR: &str = "content";
/// Attribute holding a document's research field.
pub const FIELD_ATTR: &str = "field";
/// Attribute holding the dataset a term was last seen in.
pub const DATASET_ATTR: &str = "dataset";

/// What a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Keyword,
    Method,
    Researcher,
    Institution,
    Dataset,
    Term,
    Field,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeKind::Document => "document",
            NodeKind::Keyword => "keyword",
            NodeKind::Method => "method",
            NodeKind::Researcher => "researcher",
            NodeKind::Institution => "institution",
            NodeKind::Dataset => "dataset",
            NodeKind::Term => "term",
            NodeKind::Field => "field",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub kind: NodeKind,
    pub attrs: BTreeMap<String, String>,
}

/// Undirected graph whose nodes are identified by their label.
///
/// Adding an existing label updates the node in place instead of creating
/// a second one, and at most one edge joins any two nodes. Query results
/// come back in node insertion order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    graph: UnGraph<Node, ()>,
    index: HashMap<String, NodeIndex>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `label` or, if present, change its kind.
    pub fn add_node(&mut self, label: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            self.graph[idx].kind = kind;
            return idx;
        }
        let idx = self.graph.add_node(Node {
            label: label.to_string(),
            kind,
            attrs: BTreeMap::new(),
        });
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Set an attribute on an existing node. Returns false for unknown labels.
    pub fn set_attr(&mut self, label: &str, key: &str, value: impl Into<String>) -> bool {
        match self.index.get(label) {
            Some(&idx) => {
                self.graph[idx].attrs.insert(key.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn attr(&self, label: &str, key: &str) -> Option<&str> {
        self.node(label)
            .and_then(|n| n.attrs.get(key))
            .map(String::as_str)
    }

    /// Join two labels, creating neither. Returns false if either is missing.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => {
                self.graph.update_edge(ia, ib, ());
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.index.get(label).map(|&idx| &self.graph[idx])
    }

    pub fn kind(&self, label: &str) -> Option<NodeKind> {
        self.node(label).map(|n| n.kind)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.contains_edge(ia, ib),
            _ => false,
        }
    }

    /// Labels adjacent to `label`; empty when `label` is absent.
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(label) else {
            return Vec::new();
        };
        let mut adjacent: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        adjacent.sort();
        adjacent.dedup();
        adjacent
            .into_iter()
            .map(|n| self.graph[n].label.as_str())
            .collect()
    }

    pub fn neighbors_of_kind(&self, label: &str, kind: NodeKind) -> Vec<&str> {
        self.neighbors(label)
            .into_iter()
            .filter(|n| self.kind(n) == Some(kind))
            .collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&str> {
        self.nodes()
            .filter(|n| n.kind == kind)
            .map(|n| n.label.as_str())
            .collect()
    }

    /// Edges as label pairs, in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a].label.as_str(), self.graph[b].label.as_str()))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = KnowledgeGraph::new();
        let a = g.add_node("protein", NodeKind::Keyword);
        let b = g.add_node("protein", NodeKind::Term);
        assert_eq!(a, b);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.kind("protein"), Some(NodeKind::Term));
    }

    #[test]
    fn test_no_duplicate_edges() {
        let mut g = KnowledgeGraph::new();
        g.add_node("a", NodeKind::Document);
        g.add_node("b", NodeKind::Keyword);
        assert!(g.add_edge("a", "b"));
        assert!(g.add_edge("b", "a"));
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("b", "a"));
        assert!(!g.add_edge("a", "missing"));
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let mut g = KnowledgeGraph::new();
        g.add_node("hub", NodeKind::Keyword);
        for label in ["d1", "d2", "d3"] {
            g.add_node(label, NodeKind::Document);
        }
        g.add_node("x", NodeKind::Method);
        for label in ["d3", "x", "d1", "d2"] {
            g.add_edge("hub", label);
        }
        assert_eq!(g.neighbors("hub"), vec!["d1", "d2", "d3", "x"]);
        assert_eq!(
            g.neighbors_of_kind("hub", NodeKind::Document),
            vec!["d1", "d2", "d3"]
        );
        assert!(g.neighbors("nope").is_empty());
    }

    #[test]
    fn test_attributes_overwrite() {
        let mut g = KnowledgeGraph::new();
        g.add_node("protein", NodeKind::Term);
        g.set_attr("protein", DATASET_ATTR, "bio");
        g.set_attr("protein", DATASET_ATTR, "chem");
        assert_eq!(g.attr("protein", DATASET_ATTR), Some("chem"));
        assert!(!g.set_attr("missing", DATASET_ATTR, "x"));
    }
}
