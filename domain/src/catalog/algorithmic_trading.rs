//! Algorithmic trading assistant: market analysis feeding strategy design,
//! reviewed for risk.

use crate::crew::agent::{AgentId, AgentRole};
use crate::crew::task::TaskSpec;
use crate::use_case::category::UseCaseCategory;
use crate::use_case::input::UseCaseInput;
use crate::use_case::metadata::UseCaseMetadata;
use crate::use_case::traits::{UseCase, UseCaseContext};
use serde_json::Value;

pub const ID: &str = "use_case_09_algorithmic_trading";

/// Input key carrying the instrument and period to study.
pub const MARKET_DATA_KEY: &str = "market_data";

const MARKET_ANALYST: &str = "market_analyst";
const STRATEGY_DEVELOPER: &str = "strategy_developer";
const RISK_MANAGER: &str = "risk_manager";

#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorithmicTrading;

impl AlgorithmicTrading {
    fn market_data(input: &UseCaseInput) -> Option<String> {
        match input.get(MARKET_DATA_KEY)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            value => Some(value.to_string()),
        }
    }
}

impl UseCase for AlgorithmicTrading {
    fn metadata(&self) -> UseCaseMetadata {
        UseCaseMetadata::new(
            ID,
            "Algorithmic Trading Assistant",
            "Assist in developing algorithmic trading strategies.",
            UseCaseCategory::Financial,
        )
    }

    fn setup_agents(&self, ctx: &UseCaseContext) -> Vec<AgentRole> {
        vec![
            AgentRole::new(
                MARKET_ANALYST,
                "Market Analyst",
                "Analyze market conditions and identify tradable signals",
                "You study price action, volume and macro news to spot recurring \
                 market patterns that a systematic strategy could exploit.",
            )
            .with_tools(ctx.tools.clone()),
            AgentRole::new(
                STRATEGY_DEVELOPER,
                "Strategy Developer",
                "Turn market signals into concrete algorithmic trading rules",
                "You have built and backtested systematic strategies for years and know \
                 how to express an idea as precise entry, exit and sizing rules.",
            ),
            AgentRole::new(
                RISK_MANAGER,
                "Risk Manager",
                "Evaluate trading strategies for risk and robustness",
                "You guard the firm's capital. You look for hidden leverage, overfitting \
                 and tail risk before any strategy goes live.",
            ),
        ]
    }

    fn setup_tasks(&self, _agents: &[AgentRole], input: &UseCaseInput) -> Vec<TaskSpec> {
        let focus = match input.query() {
            "" => String::new(),
            q => format!(" Focus: '{q}'."),
        };
        let market_data = Self::market_data(input)
            .map(|data| format!("\n\nMarket Data: {data}\n\n"))
            .unwrap_or_else(|| " ".to_string());

        let analyze = TaskSpec::new(
            "analyze_market",
            format!(
                "Assist in developing algorithmic trading strategies.{focus}{market_data}\
                 Summarize current market conditions and list the signals worth trading."
            ),
            &AgentId::new(MARKET_ANALYST),
        )
        .with_expected_output("A list of market signals with a short rationale for each.");

        let design = TaskSpec::new(
            "design_strategy",
            format!(
                "Design an algorithmic trading strategy from the identified signals.{focus} \
                 Specify entry rules, exit rules and position sizing."
            ),
            &AgentId::new(STRATEGY_DEVELOPER),
        )
        .with_expected_output("A rule-based strategy description.")
        .with_context([&analyze]);

        let review = TaskSpec::new(
            "review_risk",
            "Review the proposed strategy for risk. Identify failure modes, suggest risk \
             limits and state whether the strategy is ready for backtesting.",
            &AgentId::new(RISK_MANAGER),
        )
        .with_expected_output("A risk review with a go / no-go recommendation.")
        .with_context([&analyze, &design]);

        vec![analyze, design, review]
    }

    fn input_keys(&self) -> &'static [&'static str] {
        &[MARKET_DATA_KEY]
    }
}
