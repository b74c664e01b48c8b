//! Fraud detection: analyst, risk assessor and investigator working on
//! a batch of transactions.

use crate::crew::agent::{AgentId, AgentRole};
use crate::crew::task::TaskSpec;
use crate::use_case::category::UseCaseCategory;
use crate::use_case::input::UseCaseInput;
use crate::use_case::metadata::UseCaseMetadata;
use crate::use_case::traits::{UseCase, UseCaseContext};
use serde_json::Value;

pub const ID: &str = "use_case_01_fraud_detection";

/// Input key carrying the transactions to analyse.
pub const TRANSACTION_DATA_KEY: &str = "transaction_data";

/// Accepted spelling of [`TRANSACTION_DATA_KEY`] used by the hub form.
pub const TRANSACTIONS_KEY: &str = "transactions";

const ANALYST: &str = "fraud_analyst";
const RISK_ASSESSOR: &str = "risk_assessor";
const INVESTIGATOR: &str = "investigator";

#[derive(Debug, Clone, Copy, Default)]
pub struct FraudDetection;

impl FraudDetection {
    /// Transaction data as it is embedded in task text; `{}` when absent.
    fn transaction_data(input: &UseCaseInput) -> String {
        match input.first_of(&[TRANSACTION_DATA_KEY, TRANSACTIONS_KEY]) {
            Some(Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
            None => "{}".to_string(),
        }
    }
}

impl UseCase for FraudDetection {
    fn metadata(&self) -> UseCaseMetadata {
        UseCaseMetadata::new(
            ID,
            "Fraud Detection",
            "Detect suspicious financial transactions, assess their risk and \
             recommend investigative actions with a crew of three specialists.",
            UseCaseCategory::Financial,
        )
    }

    fn setup_agents(&self, ctx: &UseCaseContext) -> Vec<AgentRole> {
        vec![
            AgentRole::new(
                ANALYST,
                "Fraud Analyst",
                "Identify suspicious financial transactions",
                "You are an experienced fraud analyst with years of experience in detecting \
                 unusual patterns and suspicious activities in financial data. Your expertise \
                 helps protect organizations from financial crimes and losses.",
            )
            .with_tools(ctx.tools.clone()),
            AgentRole::new(
                RISK_ASSESSOR,
                "Risk Assessment Specialist",
                "Evaluate the severity and impact of potential fraud cases",
                "With a background in financial risk management, you excel at determining the \
                 potential impact of fraud incidents and recommending appropriate responses \
                 based on risk levels.",
            )
            .with_tools(ctx.tools.clone()),
            AgentRole::new(
                INVESTIGATOR,
                "Fraud Investigator",
                "Investigate suspected fraud cases and gather evidence",
                "Your keen investigative skills help connect the dots in complex fraud schemes. \
                 You know how to follow the trail of suspicious activities to uncover the full \
                 scope of fraud.",
            )
            .with_tools(ctx.tools.clone()),
        ]
    }

    fn setup_tasks(&self, _agents: &[AgentRole], input: &UseCaseInput) -> Vec<TaskSpec> {
        let query = input.query();
        let transactions = Self::transaction_data(input);

        let detect = TaskSpec::new(
            "detect",
            format!(
                "Analyze the following financial transactions for potential fraud: '{query}'. \n\n\
                 Transaction Data: {transactions}\n\n\
                 Identify patterns that may indicate fraudulent activity such as unusual \
                 transaction amounts, suspicious timing, abnormal frequency, or unexpected \
                 geographical locations."
            ),
            &AgentId::new(ANALYST),
        );

        let assess = TaskSpec::new(
            "assess",
            format!(
                "Evaluate the risk level of the identified suspicious patterns in '{query}'. \n\n\
                 Determine the potential financial impact, likelihood of fraud, and urgency of \
                 response. Categorize each suspicious activity by risk level (High, Medium, Low)."
            ),
            &AgentId::new(RISK_ASSESSOR),
        )
        .with_context([&detect]);

        let investigate = TaskSpec::new(
            "investigate",
            format!(
                "Conduct a detailed investigation of the high-risk suspicious activities in \
                 '{query}'. \n\n\
                 Provide evidence supporting the fraud determination, potential fraud schemes \
                 involved, and recommended actions to address the situation and prevent future \
                 occurrences."
            ),
            &AgentId::new(INVESTIGATOR),
        )
        .with_context([&detect, &assess]);

        vec![detect, assess, investigate]
    }

    fn input_keys(&self) -> &'static [&'static str] {
        &[TRANSACTION_DATA_KEY]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::task::TaskId;
    use serde_json::json;

    fn crew_for(input: &UseCaseInput) -> crate::crew::crew::Crew {
        FraudDetection
            .setup_crew(&UseCaseContext::default(), input)
            .unwrap()
    }

    #[test]
    fn test_three_agents_three_tasks() {
        let crew = crew_for(&UseCaseInput::from_query("account #12345"));
        assert_eq!(crew.agents().len(), 3);
        assert_eq!(crew.tasks().len(), 3);
        let roles: Vec<&str> = crew.agents().iter().map(|a| a.role.as_str()).collect();
        assert_eq!(
            roles,
            ["Fraud Analyst", "Risk Assessment Specialist", "Fraud Investigator"]
        );
    }

    #[test]
    fn test_context_chain() {
        let crew = crew_for(&UseCaseInput::new());
        let tasks = crew.tasks();
        assert!(tasks[0].context.is_empty());
        assert_eq!(tasks[1].context, vec![TaskId::new("detect")]);
        assert_eq!(
            tasks[2].context,
            vec![TaskId::new("detect"), TaskId::new("assess")]
        );
    }

    #[test]
    fn test_transaction_data_embedded() {
        let input = UseCaseInput::from_query("card 42")
            .with(TRANSACTION_DATA_KEY, json!({"transactions": [{"amount": 2500.0}]}));
        let crew = crew_for(&input);
        let detect = &crew.tasks()[0].description;
        assert!(detect.contains("'card 42'"));
        assert!(detect.contains(r#"Transaction Data: {"transactions":[{"amount":2500.0}]}"#));
    }

    #[test]
    fn test_transactions_alias_and_default() {
        let aliased = UseCaseInput::new().with(TRANSACTIONS_KEY, json!([1]));
        assert_eq!(FraudDetection::transaction_data(&aliased), "[1]");
        assert_eq!(FraudDetection::transaction_data(&UseCaseInput::new()), "{}");
    }

    #[test]
    fn test_tools_shared_by_all_agents() {
        let ctx = UseCaseContext::default().with_tools(["wikipedia"]);
        let agents = FraudDetection.setup_agents(&ctx);
        assert!(agents.iter().all(|a| a.tools == vec!["wikipedia".to_string()]));
    }
}
