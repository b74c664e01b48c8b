//! Interactive hub: pick a use case, feed it queries, inspect results

use super::state::{HubCommand, HubState};
use crate::{ConsoleFormatter, ProgressReporter};
use crew_application::{
    CrewProgressNotifier, LlmGateway, NoCrewProgress, RunUseCaseUseCase, ToolExecutorPort,
};
use crew_domain::OutputFormat;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

const HISTORY_CAPACITY: usize = 1000;

/// Text to show after a line, and whether the hub should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubReply {
    pub text: String,
    pub exit: bool,
}

impl HubReply {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// Interactive use case hub
pub struct HubRepl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> {
    dispatcher: RunUseCaseUseCase<G, T>,
    state: HubState,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> HubRepl<G, T> {
    pub fn new(dispatcher: RunUseCaseUseCase<G, T>) -> Self {
        Self {
            dispatcher,
            state: HubState::new(),
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist line history to `path`
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn state(&self) -> &HubState {
        &self.state
    }

    /// Run the interactive loop until `/quit` or Ctrl-D.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(path) = &self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => tracing::warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        self.print_welcome();

        loop {
            let label = match self.state.selected() {
                Some(meta) => format!("crew-hub [{}]", meta.id),
                None => "crew-hub".to_string(),
            };
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(label),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let Some(command) = HubCommand::parse(&line) else {
                        continue;
                    };
                    let reply = self.handle(command).await;
                    if !reply.text.is_empty() {
                        println!("{}", reply.text);
                    }
                    if reply.exit {
                        break;
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                }
            }
        }

        Ok(())
    }

    /// Apply one parsed line to the hub.
    pub async fn handle(&mut self, command: HubCommand) -> HubReply {
        match command {
            HubCommand::Quit => HubReply::exit("Bye!"),
            HubCommand::Help => HubReply::show(help_text()),
            HubCommand::List => {
                HubReply::show(ConsoleFormatter::format_listing(self.dispatcher.registry(), None))
            }
            HubCommand::Use(key) => self.select(&key),
            HubCommand::Info => match self.state.selected() {
                Some(meta) => HubReply::show(ConsoleFormatter::format_use_case_info(meta)),
                None => HubReply::show(no_selection()),
            },
            HubCommand::Data(json) => self.set_data(&json),
            HubCommand::Result => self.show_last(OutputFormat::Result),
            HubCommand::Raw => self.show_last(OutputFormat::Full),
            HubCommand::Clear => {
                self.state.clear();
                HubReply::show("Cleared result and input data.")
            }
            HubCommand::Unknown(cmd) => HubReply::show(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
            HubCommand::Query(query) => self.run_query(&query).await,
        }
    }

    fn select(&mut self, key: &str) -> HubReply {
        if key.is_empty() {
            return HubReply::show("Usage: /use <id|number>");
        }
        let Some(meta) = self.dispatcher.registry().resolve(key).cloned() else {
            return HubReply::show(format!("Unknown use case: {}", key));
        };
        let info = ConsoleFormatter::format_use_case_info(&meta);
        self.state.select(meta);
        HubReply::show(info)
    }

    fn set_data(&mut self, json: &str) -> HubReply {
        if json.is_empty() {
            let current = serde_json::to_string_pretty(self.state.data())
                .unwrap_or_else(|_| "{}".to_string());
            return HubReply::show(format!("Input data:\n{}", current));
        }
        match self.state.set_data(json) {
            Ok(()) => HubReply::show(format!(
                "Input data set ({} key(s)).",
                self.state.data().as_map().len()
            )),
            Err(e) => HubReply::show(format!("Invalid input data: {}", e)),
        }
    }

    fn show_last(&self, format: OutputFormat) -> HubReply {
        match self.state.last_result() {
            Some(record) => HubReply::show(ConsoleFormatter::format_record(record, format)),
            None => HubReply::show("No result yet. Type a query to run the selected use case."),
        }
    }

    async fn run_query(&mut self, query: &str) -> HubReply {
        let Some(id) = self.state.selected().map(|m| m.id.to_string()) else {
            return HubReply::show(no_selection());
        };
        let input = self.state.input_for(query);

        let cancel = CancellationToken::new();
        let interrupt = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            })
        };

        let reporter = ProgressReporter::new();
        let progress: &dyn CrewProgressNotifier = if self.show_progress {
            &reporter
        } else {
            &NoCrewProgress
        };
        let record = self
            .dispatcher
            .run_with_progress(&id, input.clone(), progress, Some(cancel))
            .await;
        interrupt.abort();

        let text = ConsoleFormatter::format_record(&record, OutputFormat::Result);
        self.state.record(input, record);
        HubReply::show(text)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              crew-hub - Use Cases           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Model: {}   Use cases: {}",
            self.dispatcher.model(),
            self.dispatcher.registry().len()
        );
        println!();
        println!("{}", help_text());
    }
}

fn no_selection() -> &'static str {
    "No use case selected. Pick one with /use <id|number> (see /list)."
}

fn help_text() -> String {
    [
        "Commands:",
        "  /list              - List use cases",
        "  /use <id|number>   - Select a use case",
        "  /info              - Show the selected use case",
        "  /data <json>       - Set extra input (JSON object), no argument shows it",
        "  /result            - Show the last result",
        "  /raw               - Show the last result with the full transcript",
        "  /clear             - Forget the last result and input data",
        "  /help, /h, /?      - Show this help",
        "  /quit, /exit, /q   - Exit",
        "",
        "Anything else is sent as the query to the selected use case.",
    ]
    .join("\n")
}
