//! Research paper summarization: read, summarize, review.

use crate::crew::agent::{AgentId, AgentRole};
use crate::crew::task::TaskSpec;
use crate::use_case::category::UseCaseCategory;
use crate::use_case::input::UseCaseInput;
use crate::use_case::metadata::UseCaseMetadata;
use crate::use_case::traits::{UseCase, UseCaseContext};

pub const ID: &str = "use_case_09_research_paper_summarization";

/// Optional input key holding the paper text or abstract.
pub const PAPER_KEY: &str = "paper";

const PAPER_ANALYST: &str = "paper_analyst";
const SUMMARY_WRITER: &str = "summary_writer";
const QUALITY_REVIEWER: &str = "quality_reviewer";

#[derive(Debug, Clone, Copy, Default)]
pub struct PaperSummarization;

impl UseCase for PaperSummarization {
    fn metadata(&self) -> UseCaseMetadata {
        UseCaseMetadata::new(
            ID,
            "Research Paper Summarization",
            "Create concise paper summaries.",
            UseCaseCategory::Research,
        )
    }

    fn setup_agents(&self, ctx: &UseCaseContext) -> Vec<AgentRole> {
        vec![
            AgentRole::new(
                PAPER_ANALYST,
                "Paper Analyst",
                "Extract the research question, method and findings of a paper",
                "You have refereed for major journals and can dissect a paper's \
                 contribution in a single careful read.",
            )
            .with_tools(ctx.tools.clone()),
            AgentRole::new(
                SUMMARY_WRITER,
                "Summary Writer",
                "Create concise paper summaries.",
                "You write plain-language digests of academic work for busy researchers.",
            ),
            AgentRole::new(
                QUALITY_REVIEWER,
                "Quality Reviewer",
                "Check summaries for accuracy and completeness",
                "You compare every summary against its source and flag anything \
                 overstated, missing or wrong.",
            ),
        ]
    }

    fn setup_tasks(&self, _agents: &[AgentRole], input: &UseCaseInput) -> Vec<TaskSpec> {
        let subject = match input.query() {
            "" => "the paper".to_string(),
            q => format!("'{q}'"),
        };
        let paper = input
            .get(PAPER_KEY)
            .and_then(|v| v.as_str())
            .map(|text| format!("\n\nPaper text:\n{text}"))
            .unwrap_or_default();

        let analyze = TaskSpec::new(
            "analyze_paper",
            format!(
                "Analyze {subject}. Identify its research question, methodology, key findings \
                 and limitations.{paper}"
            ),
            &AgentId::new(PAPER_ANALYST),
        )
        .with_expected_output("Structured notes on question, method, findings and limitations.");

        let summarize = TaskSpec::new(
            "write_summary",
            format!("Create a concise summary of {subject} from the analysis notes."),
            &AgentId::new(SUMMARY_WRITER),
        )
        .with_expected_output("A summary of at most three paragraphs.")
        .with_context([&analyze]);

        let review = TaskSpec::new(
            "review_summary",
            "Review the summary against the analysis notes. Correct inaccuracies and \
             return the final summary.",
            &AgentId::new(QUALITY_REVIEWER),
        )
        .with_expected_output("The final, corrected summary.")
        .with_context([&analyze, &summarize]);

        vec![analyze, summarize, review]
    }

    fn input_keys(&self) -> &'static [&'static str] {
        &[PAPER_KEY]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_shape() {
        let crew = PaperSummarization
            .setup_crew(&UseCaseContext::default(), &UseCaseInput::new())
            .unwrap();
        assert_eq!(crew.agents().len(), 3);
        assert_eq!(crew.tasks().len(), 3);
        assert!(crew.tasks()[0].description.starts_with("Analyze the paper."));
        assert_eq!(crew.tasks()[1].context.len(), 1);
        assert_eq!(crew.tasks()[2].context.len(), 2);
    }

    #[test]
    fn test_paper_text_embedded() {
        let input = UseCaseInput::from_query("Attention Is All You Need")
            .with(PAPER_KEY, "We propose the Transformer.");
        let tasks = PaperSummarization.setup_tasks(&[], &input);
        assert!(tasks[0].description.contains("'Attention Is All You Need'"));
        assert!(tasks[0].description.ends_with("Paper text:\nWe propose the Transformer."));
    }
}
