//! Research-assistant operations on a [`KnowledgeGraph`].

use super::graph::{CONTENT_ATTR, DATASET_ATTR, FIELD_ATTR, KnowledgeGraph, NodeKind};
use serde::{Deserialize, Serialize};

/// Characters of content kept by [`KnowledgeGraph::summarize`].
pub const SUMMARY_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Distinct lower-cased whitespace tokens, first occurrence first.
    pub fn terms(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for word in self.content.to_lowercase().split_whitespace() {
            if !seen.iter().any(|w: &String| w == word) {
                seen.push(word.to_string());
            }
        }
        seen
    }
}

/// A researcher affiliated with an institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    pub researcher: String,
    pub institution: String,
}

impl Collaboration {
    pub fn new(researcher: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            researcher: researcher.into(),
            institution: institution.into(),
        }
    }
}

/// A term as it appears in one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub id: String,
    pub term: String,
    pub dataset: String,
}

impl DataEntry {
    pub fn new(id: impl Into<String>, term: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            dataset: dataset.into(),
        }
    }
}

impl KnowledgeGraph {
    /// Add each document and link it to one keyword node per distinct term.
    pub fn ingest_keywords<'a>(&mut self, docs: impl IntoIterator<Item = &'a Document>) {
        self.ingest_terms(docs, NodeKind::Keyword);
    }

    /// Like [`ingest_keywords`](Self::ingest_keywords) but terms are methods.
    pub fn ingest_methods<'a>(&mut self, docs: impl IntoIterator<Item = &'a Document>) {
        self.ingest_terms(docs, NodeKind::Method);
    }

    fn ingest_terms<'a>(&mut self, docs: impl IntoIterator<Item = &'a Document>, kind: NodeKind) {
        for doc in docs {
            self.add_document(doc);
            for term in doc.terms() {
                self.add_node(&term, kind);
                self.add_edge(&doc.title, &term);
            }
        }
    }

    /// Add documents with their content but no keyword links.
    pub fn ingest_documents<'a>(&mut self, docs: impl IntoIterator<Item = &'a Document>) {
        for doc in docs {
            self.add_document(doc);
        }
    }

    fn add_document(&mut self, doc: &Document) {
        self.add_node(&doc.title, NodeKind::Document);
        self.set_attr(&doc.title, CONTENT_ATTR, doc.content.as_str());
        if let Some(field) = &doc.field {
            self.set_attr(&doc.title, FIELD_ATTR, field.as_str());
        }
    }

    /// Titles of documents linked to `keyword`.
    pub fn query(&self, keyword: &str) -> Vec<&str> {
        self.neighbors_of_kind(keyword, NodeKind::Document)
    }

    /// Documents to cite for `topic`.
    pub fn collect_references(&self, topic: &str) -> Vec<&str> {
        self.query(topic)
    }

    /// Keyword pairs not yet connected: candidate research ideas.
    pub fn suggest_new_links(&self) -> Vec<(&str, &str)> {
        let keywords = self.nodes_of_kind(NodeKind::Keyword);
        let mut suggestions = Vec::new();
        for (i, a) in keywords.iter().enumerate() {
            for b in &keywords[i + 1..] {
                if !self.has_edge(a, b) {
                    suggestions.push((*a, *b));
                }
            }
        }
        suggestions
    }

    /// Title and leading content snippet of every document.
    pub fn summarize(&self) -> Vec<(&str, String)> {
        self.nodes()
            .filter(|n| n.kind == NodeKind::Document)
            .map(|n| {
                let content = n.attrs.get(CONTENT_ATTR).map(String::as_str).unwrap_or("");
                (n.label.as_str(), content.chars().take(SUMMARY_CHARS).collect())
            })
            .collect()
    }

    /// Sorted, de-duplicated method names.
    pub fn recommend_methods(&self) -> Vec<&str> {
        let mut methods = self.nodes_of_kind(NodeKind::Method);
        methods.sort_unstable();
        methods.dedup();
        methods
    }

    pub fn ingest_collaborations<'a>(&mut self, records: impl IntoIterator<Item = &'a Collaboration>) {
        for rec in records {
            self.add_node(&rec.researcher, NodeKind::Researcher);
            self.add_node(&rec.institution, NodeKind::Institution);
            self.add_edge(&rec.researcher, &rec.institution);
        }
    }

    pub fn find_institutions(&self, researcher: &str) -> Vec<&str> {
        self.neighbors_of_kind(researcher, NodeKind::Institution)
    }

    /// Link each dataset to its terms. A term seen in several datasets
    /// keeps the last one as its `dataset` attribute.
    pub fn ingest_ontology<'a>(&mut self, entries: impl IntoIterator<Item = &'a DataEntry>) {
        for entry in entries {
            self.add_node(&entry.term, NodeKind::Term);
            self.set_attr(&entry.term, DATASET_ATTR, entry.dataset.as_str());
            self.add_node(&entry.dataset, NodeKind::Dataset);
            self.add_edge(&entry.dataset, &entry.term);
        }
    }

    /// Ingest a newly observed document and return its title.
    pub fn monitor_and_add(&mut self, doc: &Document) -> String {
        self.ingest_documents([doc]);
        doc.title.clone()
    }

    /// Add documents linked to a node for their field. Documents without a
    /// field are ignored.
    pub fn ingest_fields<'a>(&mut self, docs: impl IntoIterator<Item = &'a Document>) {
        for doc in docs {
            let Some(field) = &doc.field else { continue };
            self.add_document(doc);
            self.add_node(field, NodeKind::Field);
            self.add_edge(&doc.title, field);
        }
    }

    /// Ordered pairs of documents from different fields.
    pub fn cross_field_links(&self) -> Vec<(&str, &str)> {
        let docs: Vec<(&str, &str)> = self
            .nodes()
            .filter(|n| n.kind == NodeKind::Document)
            .filter_map(|n| {
                n.attrs
                    .get(FIELD_ATTR)
                    .map(|f| (n.label.as_str(), f.as_str()))
            })
            .collect();

        let mut links = Vec::new();
        for (a, field_a) in &docs {
            for (b, field_b) in &docs {
                if a != b && field_a != field_b {
                    links.push((*a, *b));
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_docs() -> Vec<Document> {
        vec![
            Document::new("LLM Knowledge Graphs", "using llms to build knowledge graphs"),
            Document::new("Research Agents", "agents automate research tasks"),
        ]
    }

    #[test]
    fn test_terms_dedup_lowercase() {
        let doc = Document::new("t", "Graph graph  GRAPH mining");
        assert_eq!(doc.terms(), vec!["graph", "mining"]);
    }

    #[test]
    fn test_ingest_keywords_counts() {
        let mut g = KnowledgeGraph::new();
        g.ingest_keywords(&sample_docs());
        // 2 documents, 6 + 4 distinct keywords
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.edge_count(), 10);
    }

    #[test]
    fn test_query() {
        let mut g = KnowledgeGraph::new();
        g.ingest_keywords(&sample_docs());
        assert_eq!(g.query("research"), vec!["Research Agents"]);
        assert!(g.query("quantum").is_empty());
        assert_eq!(g.collect_references("knowledge"), vec!["LLM Knowledge Graphs"]);
    }

    #[test]
    fn test_shared_keyword_links_both_documents() {
        let mut g = KnowledgeGraph::new();
        g.ingest_keywords(&[
            Document::new("Funding Strategies", "grant writing research"),
            Document::new("Knowledge Graph Benefits", "knowledge graph research"),
        ]);
        assert_eq!(
            g.collect_references("research"),
            vec!["Funding Strategies", "Knowledge Graph Benefits"]
        );
    }

    #[test]
    fn test_suggest_new_links_all_keyword_pairs() {
        let mut g = KnowledgeGraph::new();
        g.ingest_keywords(&[Document::new("d", "a b c")]);
        assert_eq!(g.suggest_new_links(), vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }

    #[test]
    fn test_summarize_truncates() {
        let mut g = KnowledgeGraph::new();
        let long = "x".repeat(80);
        g.ingest_documents(&[Document::new("Long", long.as_str()), Document::new("Short", "hi")]);
        let summary = g.summarize();
        assert_eq!(summary[0].0, "Long");
        assert_eq!(summary[0].1.chars().count(), SUMMARY_CHARS);
        assert_eq!(summary[1], ("Short", "hi".to_string()));
    }

    #[test]
    fn test_recommend_methods_sorted() {
        let mut g = KnowledgeGraph::new();
        g.ingest_methods(&[
            Document::new("Image Classification", "use cnn and torch"),
            Document::new("Graph Analysis", "apply networkx and centrality"),
        ]);
        assert_eq!(
            g.recommend_methods(),
            vec!["and", "apply", "centrality", "cnn", "networkx", "torch", "use"]
        );
    }

    #[test]
    fn test_find_institutions() {
        let mut g = KnowledgeGraph::new();
        g.ingest_collaborations(&[
            Collaboration::new("Alice", "University A"),
            Collaboration::new("Bob", "University B"),
            Collaboration::new("Alice", "Research Lab X"),
        ]);
        assert_eq!(g.find_institutions("Alice"), vec!["University A", "Research Lab X"]);
        assert!(g.find_institutions("Carol").is_empty());
    }

    #[test]
    fn test_ingest_ontology() {
        let mut g = KnowledgeGraph::new();
        g.ingest_ontology(&[DataEntry::new("1", "protein", "bio"), DataEntry::new("2", "protein", "chem")]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.attr("protein", DATASET_ATTR), Some("chem"));
        assert_eq!(g.neighbors("protein"), vec!["bio", "chem"]);
    }

    #[test]
    fn test_monitor_and_add() {
        let mut g = KnowledgeGraph::new();
        g.ingest_documents(&[Document::new("Start", "baseline")]);
        let added = g.monitor_and_add(&Document::new("New Research", "latest findings"));
        assert_eq!(added, "New Research");
        assert_eq!(g.nodes_of_kind(NodeKind::Document), vec!["Start", "New Research"]);
    }

    #[test]
    fn test_cross_field_links() {
        let mut g = KnowledgeGraph::new();
        g.ingest_fields(&[
            Document::new("Graph Mining", "techniques").with_field("Computer Science"),
            Document::new("Protein Analysis", "biology").with_field("Biology"),
            Document::new("Network Biology", "graphs").with_field("Biology"),
        ]);
        let links = g.cross_field_links();
        assert_eq!(links.len(), 4);
        assert!(links.contains(&("Graph Mining", "Protein Analysis")));
        assert!(links.contains(&("Protein Analysis", "Graph Mining")));
        assert!(!links.contains(&("Protein Analysis", "Network Biology")));
    }
}
