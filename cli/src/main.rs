//! CLI entrypoint for crew-hub
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crew_application::{
    CrewProgressNotifier, LlmGateway, NoCrewProgress, RunLogger, RunUseCaseUseCase,
    UseCaseRegistry,
};
use crew_domain::use_case::input::QUERY_KEY;
use crew_domain::{OutputFormat, Showcase, UseCaseInput};
use crew_infrastructure::{
    ConfigLoader, DirectoryMetadataSource, FileConfig, JsonlRunLogger, LocalToolExecutor,
    OllamaLlmGateway,
};
use crew_presentation::{Cli, Command, ConsoleFormatter, HubRepl, ProgressReporter, RunArgs};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Dispatcher = RunUseCaseUseCase<OllamaLlmGateway, LocalToolExecutor>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.ollama.base_url = base_url.clone();
    }
    config.validate().context("Invalid configuration")?;

    let _log_guard = init_logging(cli.verbose, &config);
    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting crew-hub with model {}", config.ollama.model);

    match cli.subcommand() {
        Command::List { category, json } => {
            let registry = build_registry(&config);
            let category = category.map(Into::into);
            let output = if json {
                ConsoleFormatter::format_listing_json(&registry, category)
            } else {
                ConsoleFormatter::format_listing(&registry, category)
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Command::Graph { demo } => {
            let demos = match demo {
                Some(name) => vec![name.parse::<Showcase>()?],
                None => Showcase::ALL.to_vec(),
            };
            for demo in demos {
                println!("{}", ConsoleFormatter::format_showcase(&demo.run()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Models => {
            let gateway = build_gateway(&config)?;
            let models = gateway
                .available_models()
                .await
                .with_context(|| format!("Could not list models at {}", gateway.base_url()))?;
            println!(
                "{}",
                ConsoleFormatter::format_models(&models, &config.ollama.model())
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Run(args) => {
            let dispatcher = build_dispatcher(&config, !args.no_tools)?;
            run_once(&dispatcher, &args, &config, cli.quiet).await
        }
        Command::Hub => {
            let dispatcher = build_dispatcher(&config, true)?;
            let mut hub = HubRepl::new(dispatcher)
                .with_progress(config.hub.show_progress && !cli.quiet)
                .with_history_file(config.hub.history_path());
            hub.run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize tracing. The returned guard flushes the log file on drop.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let (file_layer, guard) = match &config.logging.run_log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "crew-hub.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn build_gateway(config: &FileConfig) -> Result<OllamaLlmGateway> {
    OllamaLlmGateway::new(config.ollama.base_url.clone(), config.ollama.timeout())
        .context("Failed to create Ollama client")
}

fn build_registry(config: &FileConfig) -> UseCaseRegistry {
    let registry = UseCaseRegistry::builtin();
    match &config.catalog.directory {
        Some(dir) => registry.with_metadata_source(&DirectoryMetadataSource::new(dir)),
        None => registry,
    }
}

// === Dependency Injection ===
fn build_dispatcher(config: &FileConfig, use_tools: bool) -> Result<Dispatcher> {
    let gateway = Arc::new(build_gateway(config)?);
    let tools = Arc::new(LocalToolExecutor::new());
    let params = config
        .crew
        .to_kickoff_params()
        .with_tools(config.crew.use_tools && use_tools);

    let mut dispatcher = RunUseCaseUseCase::new(Arc::new(build_registry(config)), gateway, tools)
        .with_model(config.ollama.model())
        .with_params(params);

    if let Some(dir) = &config.logging.run_log_dir {
        match JsonlRunLogger::in_dir(dir) {
            Some(logger) => {
                info!("Run log: {}", logger.path().display());
                let logger: Arc<dyn RunLogger> = Arc::new(logger);
                dispatcher = dispatcher.with_run_logger(logger);
            }
            None => warn!("Run log disabled: cannot write to {}", dir.display()),
        }
    }

    Ok(dispatcher)
}

async fn run_once(
    dispatcher: &Dispatcher,
    args: &RunArgs,
    config: &FileConfig,
    quiet: bool,
) -> Result<ExitCode> {
    let mut input = match (&args.input, &args.input_file) {
        (Some(json), _) => UseCaseInput::from_json(json)?,
        (None, Some(path)) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            UseCaseInput::from_json(&json)?
        }
        (None, None) => UseCaseInput::new(),
    };
    if let Some(query) = &args.query {
        input.insert(QUERY_KEY, query.as_str());
    }

    let format = config.output.resolve_format(args.output.map(Into::into));

    // Numbers from `list` are accepted as well as ids
    let id = dispatcher
        .registry()
        .resolve(&args.id)
        .map(|meta| meta.id.to_string())
        .unwrap_or_else(|| args.id.clone());

    let reporter = ProgressReporter::new();
    let progress: &dyn CrewProgressNotifier = if quiet || format == OutputFormat::Json {
        &NoCrewProgress
    } else {
        &reporter
    };
    let record = dispatcher
        .run_with_progress(&id, input, progress, None)
        .await;

    println!("{}", ConsoleFormatter::format_record(&record, format));

    Ok(if record.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
