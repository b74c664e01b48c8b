//! Canned knowledge graph demonstrations over hard-coded data.

use super::graph::{DATASET_ATTR, KnowledgeGraph, NodeKind};
use super::operations::{Collaboration, DataEntry, Document};
use crate::core::error::DomainError;
use serde::Serialize;
use std::str::FromStr;

/// One of the ten knowledge graph showcases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showcase {
    KnowledgeGraph,
    AcceleratedQuerying,
    IdeaIncubation,
    LiteratureReview,
    ExperimentDesign,
    GrantProposal,
    CollaborationNetwork,
    OntologyIntegration,
    ResearchUpdates,
    InterdisciplinaryLinks,
}

/// Printable outcome of a showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseReport {
    pub slug: &'static str,
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Showcase {
    pub const ALL: [Showcase; 10] = [
        Showcase::KnowledgeGraph,
        Showcase::AcceleratedQuerying,
        Showcase::IdeaIncubation,
        Showcase::LiteratureReview,
        Showcase::ExperimentDesign,
        Showcase::GrantProposal,
        Showcase::CollaborationNetwork,
        Showcase::OntologyIntegration,
        Showcase::ResearchUpdates,
        Showcase::InterdisciplinaryLinks,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Showcase::KnowledgeGraph => "knowledge-graph",
            Showcase::AcceleratedQuerying => "accelerated-querying",
            Showcase::IdeaIncubation => "idea-incubation",
            Showcase::LiteratureReview => "literature-review",
            Showcase::ExperimentDesign => "experiment-design",
            Showcase::GrantProposal => "grant-proposal",
            Showcase::CollaborationNetwork => "collaboration-network",
            Showcase::OntologyIntegration => "ontology-integration",
            Showcase::ResearchUpdates => "research-updates",
            Showcase::InterdisciplinaryLinks => "interdisciplinary-links",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Showcase::KnowledgeGraph => "Knowledge Graph Creation",
            Showcase::AcceleratedQuerying => "Accelerated Querying",
            Showcase::IdeaIncubation => "Idea Incubation",
            Showcase::LiteratureReview => "Automated Literature Review",
            Showcase::ExperimentDesign => "Experiment Design Assistance",
            Showcase::GrantProposal => "Grant Proposal Support",
            Showcase::CollaborationNetwork => "Collaboration Network Mapping",
            Showcase::OntologyIntegration => "Data Integration with Ontologies",
            Showcase::ResearchUpdates => "Real-time Research Updates",
            Showcase::InterdisciplinaryLinks => "Interdisciplinary Connection Finder",
        }
    }

    pub fn run(&self) -> ShowcaseReport {
        let lines = match self {
            Showcase::KnowledgeGraph => {
                let mut g = KnowledgeGraph::new();
                g.ingest_keywords(&research_documents());
                let nodes: Vec<&str> = g.nodes().map(|n| n.label.as_str()).collect();
                let edges: Vec<String> = g
                    .edges()
                    .into_iter()
                    .map(|(a, b)| format!("{a} -- {b}"))
                    .collect();
                vec![
                    format!("Nodes: {}", nodes.join(", ")),
                    format!("Edges: {}", edges.join(", ")),
                ]
            }
            Showcase::AcceleratedQuerying => {
                let mut g = KnowledgeGraph::new();
                g.ingest_keywords(&research_documents());
                vec![format!(
                    "Documents related to 'research': {}",
                    g.query("research").join(", ")
                )]
            }
            Showcase::IdeaIncubation => {
                let mut g = KnowledgeGraph::new();
                g.ingest_keywords(&research_documents());
                let ideas = g.suggest_new_links();
                let mut lines = vec![format!("Possible new topic links: {}", ideas.len())];
                lines.extend(ideas.into_iter().map(|(a, b)| format!("  {a} <-> {b}")));
                lines
            }
            Showcase::LiteratureReview => {
                let mut g = KnowledgeGraph::new();
                g.ingest_documents(&research_documents());
                g.summarize()
                    .into_iter()
                    .map(|(title, snippet)| format!("{title}: {snippet}"))
                    .collect()
            }
            Showcase::ExperimentDesign => {
                let mut g = KnowledgeGraph::new();
                g.ingest_methods(&[
                    Document::new("Image Classification", "use cnn and torch"),
                    Document::new("Graph Analysis", "apply networkx and centrality"),
                ]);
                vec![format!("Suggested methods: {}", g.recommend_methods().join(", "))]
            }
            Showcase::GrantProposal => {
                let mut g = KnowledgeGraph::new();
                g.ingest_keywords(&[
                    Document::new("Funding Strategies", "grant writing research"),
                    Document::new("Knowledge Graph Benefits", "knowledge graph research"),
                ]);
                vec![format!(
                    "References for 'research': {}",
                    g.collect_references("research").join(", ")
                )]
            }
            Showcase::CollaborationNetwork => {
                let mut g = KnowledgeGraph::new();
                g.ingest_collaborations(&[
                    Collaboration::new("Alice", "University A"),
                    Collaboration::new("Bob", "University B"),
                    Collaboration::new("Alice", "Research Lab X"),
                ]);
                vec![format!(
                    "Institutions for Alice: {}",
                    g.find_institutions("Alice").join(", ")
                )]
            }
            Showcase::OntologyIntegration => {
                let mut g = KnowledgeGraph::new();
                g.ingest_ontology(&[
                    DataEntry::new("1", "protein", "bio"),
                    DataEntry::new("2", "protein", "chem"),
                ]);
                g.nodes()
                    .map(|n| match n.attrs.get(DATASET_ATTR) {
                        Some(dataset) => format!("{} ({}, dataset: {})", n.label, n.kind, dataset),
                        None => format!("{} ({})", n.label, n.kind),
                    })
                    .collect()
            }
            Showcase::ResearchUpdates => {
                let mut g = KnowledgeGraph::new();
                g.ingest_documents(&[Document::new("Start", "baseline")]);
                let added = g.monitor_and_add(&Document::new("New Research", "latest findings"));
                vec![
                    format!("Added {added}"),
                    format!("Documents: {}", g.nodes_of_kind(NodeKind::Document).join(", ")),
                ]
            }
            Showcase::InterdisciplinaryLinks => {
                let mut g = KnowledgeGraph::new();
                g.ingest_fields(&[
                    Document::new("Graph Mining", "techniques").with_field("Computer Science"),
                    Document::new("Protein Analysis", "biology").with_field("Biology"),
                ]);
                let pairs: Vec<String> = g
                    .cross_field_links()
                    .into_iter()
                    .map(|(a, b)| format!("({a}, {b})"))
                    .collect();
                vec![format!("Cross-field document pairs: {}", pairs.join(", "))]
            }
        };

        ShowcaseReport {
            slug: self.slug(),
            title: self.title(),
            lines,
        }
    }
}

impl std::fmt::Display for Showcase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Showcase {
    type Err = DomainError;

    /// Accepts the slug, or its 1-based position in [`Showcase::ALL`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>()
            && (1..=Self::ALL.len()).contains(&n)
        {
            return Ok(Self::ALL[n - 1]);
        }
        Self::ALL
            .into_iter()
            .find(|demo| demo.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown demo: {}", s)))
    }
}

fn research_documents() -> Vec<Document> {
    vec![
        Document::new("LLM Knowledge Graphs", "using llms to build knowledge graphs"),
        Document::new("Research Agents", "agents automate research tasks"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_demo_reports_something() {
        for demo in Showcase::ALL {
            let report = demo.run();
            assert!(!report.lines.is_empty(), "{demo}");
            assert_eq!(report.slug, demo.slug());
        }
    }

    #[test]
    fn test_parse_by_slug_or_number() {
        assert_eq!("idea-incubation".parse::<Showcase>().unwrap(), Showcase::IdeaIncubation);
        assert_eq!("1".parse::<Showcase>().unwrap(), Showcase::KnowledgeGraph);
        assert_eq!("10".parse::<Showcase>().unwrap(), Showcase::InterdisciplinaryLinks);
        assert!("11".parse::<Showcase>().is_err());
        assert!("nope".parse::<Showcase>().is_err());
    }

    #[test]
    fn test_accelerated_querying_output() {
        let report = Showcase::AcceleratedQuerying.run();
        assert_eq!(report.lines, vec!["Documents related to 'research': Research Agents"]);
    }

    #[test]
    fn test_collaboration_output() {
        let report = Showcase::CollaborationNetwork.run();
        assert_eq!(
            report.lines,
            vec!["Institutions for Alice: University A, Research Lab X"]
        );
    }

    #[test]
    fn test_research_updates_output() {
        let report = Showcase::ResearchUpdates.run();
        assert_eq!(report.lines[0], "Added New Research");
        assert_eq!(report.lines[1], "Documents: Start, New Research");
    }
}
