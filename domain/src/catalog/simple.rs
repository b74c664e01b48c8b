//! Single-agent use cases: one role, one task, the goal as the task.

use crate::crew::agent::AgentRole;
use crate::crew::task::TaskSpec;
use crate::use_case::category::UseCaseCategory;
use crate::use_case::category::UseCaseCategory::{Financial, Research};
use crate::use_case::input::UseCaseInput;
use crate::use_case::metadata::UseCaseMetadata;
use crate::use_case::traits::{UseCase, UseCaseContext};

/// A use case whose crew is a single agent pursuing its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleAgentUseCase {
    pub id: &'static str,
    pub category: UseCaseCategory,
    /// Doubles as the agent's role.
    pub title: &'static str,
    /// Doubles as the task description.
    pub goal: &'static str,
}

impl SingleAgentUseCase {
    const AGENT: &'static str = "agent";
    const TASK: &'static str = "task";

    pub const fn new(
        id: &'static str,
        category: UseCaseCategory,
        title: &'static str,
        goal: &'static str,
    ) -> Self {
        Self {
            id,
            category,
            title,
            goal,
        }
    }
}

impl UseCase for SingleAgentUseCase {
    fn metadata(&self) -> UseCaseMetadata {
        UseCaseMetadata::new(self.id, self.title, self.goal, self.category)
    }

    /// The agent never gets tools, whatever the context offers.
    fn setup_agents(&self, _ctx: &UseCaseContext) -> Vec<AgentRole> {
        vec![AgentRole::new(
            Self::AGENT,
            self.title,
            self.goal,
            format!("Agent for {}.", self.title.to_lowercase()),
        )]
    }

    fn setup_tasks(&self, agents: &[AgentRole], input: &UseCaseInput) -> Vec<TaskSpec> {
        let description = match input.query() {
            "" => self.goal.to_string(),
            query => format!("{}\n\nRequest: {}", self.goal, query),
        };
        agents
            .first()
            .map(|agent| TaskSpec::new(Self::TASK, description, &agent.id))
            .into_iter()
            .collect()
    }
}

/// Every built-in single-agent use case.
pub const SINGLE_AGENT_USE_CASES: &[SingleAgentUseCase] = &[
    SingleAgentUseCase::new(
        "use_case_02_risk_management",
        Financial,
        "Risk Management",
        "Use a crew to assess risk in derivative portfolios.",
    ),
    SingleAgentUseCase::new(
        "use_case_03_financial_reporting",
        Financial,
        "Automated Financial Reporting",
        "Generate periodic financial reports automatically.",
    ),
    SingleAgentUseCase::new(
        "use_case_04_portfolio_optimization",
        Financial,
        "Portfolio Optimization",
        "Optimize investment portfolios using AI agents.",
    ),
    SingleAgentUseCase::new(
        "use_case_05_bank_chatbot",
        Financial,
        "Bank Customer Service Chatbot",
        "Provide customer support for banking queries.",
    ),
    SingleAgentUseCase::new(
        "use_case_06_compliance_monitoring",
        Financial,
        "Compliance Monitoring",
        "Monitor transactions for regulatory compliance.",
    ),
    SingleAgentUseCase::new(
        "use_case_07_loan_default_prediction",
        Financial,
        "Loan Default Prediction",
        "Predict potential loan defaults.",
    ),
    SingleAgentUseCase::new(
        "use_case_08_insider_trading_detection",
        Financial,
        "Insider Trading Detection",
        "Detect potential insider trading activities.",
    ),
    SingleAgentUseCase::new(
        "use_case_10_insurance_claim_processing",
        Financial,
        "Insurance Claim Processing",
        "Automate processing of insurance claims.",
    ),
    SingleAgentUseCase::new(
        "use_case_01_literature_review",
        Research,
        "Literature Review",
        "Summarize relevant academic papers.",
    ),
    SingleAgentUseCase::new(
        "use_case_02_experiment_design",
        Research,
        "Experiment Design",
        "Assist researchers with designing experiments.",
    ),
    SingleAgentUseCase::new(
        "use_case_03_data_analysis",
        Research,
        "Data Analysis",
        "Analyze datasets and interpret results.",
    ),
    SingleAgentUseCase::new(
        "use_case_04_grant_writing",
        Research,
        "Grant Writing",
        "Help draft research grant proposals.",
    ),
    SingleAgentUseCase::new(
        "use_case_05_peer_review_assistant",
        Research,
        "Peer Review Assistant",
        "Provide feedback on draft manuscripts.",
    ),
    SingleAgentUseCase::new(
        "use_case_06_research_project_management",
        Research,
        "Research Project Management",
        "Track tasks for a research project.",
    ),
    SingleAgentUseCase::new(
        "use_case_07_scientific_visualization",
        Research,
        "Scientific Visualization",
        "Generate visualizations for publications.",
    ),
    SingleAgentUseCase::new(
        "use_case_08_ai_model_reproducibility",
        Research,
        "AI Model Reproducibility",
        "Check reproducibility of AI models.",
    ),
    SingleAgentUseCase::new(
        "use_case_10_academic_citation_management",
        Research,
        "Academic Citation Management",
        "Manage references and citations.",
    ),
];
