//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use crew_domain::{OutputFormat, UseCaseCategory};
use std::path::PathBuf;

/// How a run result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Only the crew's final answer
    Result,
    /// The answer followed by the raw agent transcript
    Full,
    /// The run record as JSON
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Result => OutputFormat::Result,
            OutputArg::Full => OutputFormat::Full,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Financial,
    Research,
}

impl From<CategoryArg> for UseCaseCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Financial => UseCaseCategory::Financial,
            CategoryArg::Research => UseCaseCategory::Research,
        }
    }
}

/// CLI arguments for crew-hub
#[derive(Parser, Debug)]
#[command(name = "crew-hub")]
#[command(author, version, about = "Run role-playing agent crews on a local Ollama model")]
#[command(long_about = r#"
crew-hub runs crews of role-playing agents for financial and research
scenarios. Each agent works on one task in turn and hands its answer to
the next; the last answer is the result.

Configuration files are loaded from (lowest to highest priority):
1. ~/.config/crew-hub/config.toml   Global config
2. ./crew-hub.toml                  Project-level config
3. --config <path>                  Explicit config file
Environment: OLLAMA_MODEL, OLLAMA_BASE_URL, CREW_HUB_<SECTION>__<KEY>

Example:
  crew-hub list --category financial
  crew-hub run use_case_01_fraud_detection --query "Review account 12345" \
      --input '{"transaction_data": {"transactions": [{"amount": 2500}]}}'
  crew-hub graph literature_review
  crew-hub            # interactive hub
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ollama model every agent uses
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Ollama server address
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the available use cases
    List {
        /// Only this category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one use case and print its result
    Run(RunArgs),

    /// Interactive hub (the default)
    Hub,

    /// Run the knowledge graph demonstrations
    Graph {
        /// Demo name or number; all demos when omitted
        demo: Option<String>,
    },

    /// List models installed on the Ollama server
    Models,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Use case id (`use_case_01_fraud_detection`) or its number in `list`
    pub id: String,

    /// Free-text request for the crew
    #[arg(long)]
    pub query: Option<String>,

    /// Extra input as a JSON object
    #[arg(long, value_name = "JSON", conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the extra input object from a file
    #[arg(long, value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Output format (defaults to `[output] format`, then `result`)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Skip the research tools
    #[arg(long)]
    pub no_tools: bool,
}

impl Cli {
    /// The subcommand to run; the hub when none was given.
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Hub)
    }
}
