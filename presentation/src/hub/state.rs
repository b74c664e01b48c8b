//! Hub session state and command parsing

use crew_domain::use_case::input::QUERY_KEY;
use crew_domain::{DomainError, RunRecord, UseCaseInput, UseCaseMetadata};

/// One line typed into the hub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubCommand {
    List,
    Use(String),
    Info,
    Data(String),
    Result,
    Raw,
    Clear,
    Help,
    Quit,
    /// Anything that is not a command runs the selected use case
    Query(String),
    Unknown(String),
}

impl HubCommand {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(HubCommand::Query(line.to_string()));
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        Some(match command {
            "/list" | "/ls" => HubCommand::List,
            "/use" => HubCommand::Use(arg.to_string()),
            "/info" => HubCommand::Info,
            "/data" => HubCommand::Data(arg.to_string()),
            "/result" => HubCommand::Result,
            "/raw" => HubCommand::Raw,
            "/clear" => HubCommand::Clear,
            "/help" | "/h" | "/?" => HubCommand::Help,
            "/quit" | "/exit" | "/q" => HubCommand::Quit,
            other => HubCommand::Unknown(other.to_string()),
        })
    }
}

/// What the hub remembers between lines.
#[derive(Debug, Default)]
pub struct HubState {
    selected: Option<UseCaseMetadata>,
    /// Extra input set with `/data`, sent with every query
    data: UseCaseInput,
    last_input: Option<UseCaseInput>,
    last_result: Option<RunRecord>,
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&UseCaseMetadata> {
        self.selected.as_ref()
    }

    /// Select a use case. Switching to a different one forgets the
    /// previous result and input; re-selecting the current one keeps them.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, meta: UseCaseMetadata) -> bool {
        if self.selected.as_ref().is_some_and(|m| m.id == meta.id) {
            return false;
        }
        self.selected = Some(meta);
        self.clear();
        true
    }

    /// Replace the extra input. Only JSON objects are accepted; on error
    /// the previous data is kept.
    pub fn set_data(&mut self, json: &str) -> Result<(), DomainError> {
        self.data = UseCaseInput::from_json(json)?;
        Ok(())
    }

    pub fn data(&self) -> &UseCaseInput {
        &self.data
    }

    /// Input for a run: the extra data plus `query`.
    pub fn input_for(&self, query: &str) -> UseCaseInput {
        let mut input = self.data.clone();
        input.insert(QUERY_KEY, query);
        input
    }

    pub fn record(&mut self, input: UseCaseInput, record: RunRecord) {
        self.last_input = Some(input);
        self.last_result = Some(record);
    }

    pub fn last_input(&self) -> Option<&UseCaseInput> {
        self.last_input.as_ref()
    }

    pub fn last_result(&self) -> Option<&RunRecord> {
        self.last_result.as_ref()
    }

    /// Forget result, input and extra data; the selection stays.
    pub fn clear(&mut self) {
        self.data = UseCaseInput::new();
        self.last_input = None;
        self.last_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_domain::UseCaseCategory;

    fn meta(id: &str) -> UseCaseMetadata {
        UseCaseMetadata::fallback(id, UseCaseCategory::Financial)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(HubCommand::parse("   "), None);
        assert_eq!(HubCommand::parse("/list"), Some(HubCommand::List));
        assert_eq!(
            HubCommand::parse("/use  3 "),
            Some(HubCommand::Use("3".to_string()))
        );
        assert_eq!(
            HubCommand::parse(r#"/data {"a": 1}"#),
            Some(HubCommand::Data(r#"{"a": 1}"#.to_string()))
        );
        assert_eq!(HubCommand::parse("/q"), Some(HubCommand::Quit));
        assert_eq!(
            HubCommand::parse("/frobnicate now"),
            Some(HubCommand::Unknown("/frobnicate".to_string()))
        );
        assert_eq!(
            HubCommand::parse(" review account 12345 "),
            Some(HubCommand::Query("review account 12345".to_string()))
        );
    }

    #[test]
    fn test_switching_use_case_resets_result_and_input() {
        let mut state = HubState::new();
        assert!(state.select(meta("use_case_01_fraud_detection")));
        state.set_data(r#"{"transaction_data": {"transactions": []}}"#).unwrap();
        let input = state.input_for("q");
        state.record(input, RunRecord::succeeded("r", "o"));

        assert!(!state.select(meta("use_case_01_fraud_detection")));
        assert!(state.last_result().is_some());
        assert!(!state.data().is_empty());

        assert!(state.select(meta("use_case_02_risk_management")));
        assert!(state.last_result().is_none());
        assert!(state.last_input().is_none());
        assert!(state.data().is_empty());
    }

    #[test]
    fn test_invalid_data_keeps_previous() {
        let mut state = HubState::new();
        state.set_data(r#"{"transactions": [1]}"#).unwrap();

        assert!(state.set_data("[1, 2]").is_err());
        assert!(state.set_data("{oops").is_err());
        assert!(state.data().get("transactions").is_some());
    }

    #[test]
    fn test_input_for_merges_query_over_data() {
        let mut state = HubState::new();
        state.set_data(r#"{"query": "stale", "transaction_data": "tx"}"#).unwrap();

        let input = state.input_for("fresh");
        assert_eq!(input.query(), "fresh");
        assert_eq!(input.get("transaction_data").unwrap(), "tx");
    }

    #[test]
    fn test_clear_keeps_selection() {
        let mut state = HubState::new();
        state.select(meta("use_case_03_financial_reporting"));
        state.record(UseCaseInput::new(), RunRecord::failed("e", "t"));

        state.clear();
        assert!(state.last_result().is_none());
        assert_eq!(
            state.selected().unwrap().id.as_str(),
            "use_case_03_financial_reporting"
        );
    }
}
