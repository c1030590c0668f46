//! CLI entrypoint for debate-flows
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use flows_application::{
    FlowDispatcher, FlowLogger, ModelGateway, NoFlowLogger, RunFlowInput, RunFlowUseCase,
};
use flows_domain::{FlowConfiguration, FlowType, OutputFormat, PromptContext, Severity};
use flows_infrastructure::{
    ConfigLoader, EchoGateway, FileConfig, JsonlFlowLogger, TranscriptContextLoader, build_gateway,
};
use flows_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress, set_color_enabled,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level.
///
/// Returns the appender guard when logging to a file; it must live until exit.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration ({} error(s))", issues.iter().filter(|i| i.is_error()).count());
    }

    Ok(config)
}

fn list_flows(dispatcher: &FlowDispatcher, default: FlowType) {
    println!("Available flows:");
    for flow in dispatcher.flow_types() {
        let marker = if flow == default { " (default)" } else { "" };
        println!("  {:<22} {}{}", flow.as_str(), flow.description(), marker);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting debate-flows");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    let (defaults, _) = config.flows.to_flow_defaults();

    // === Dependency Injection ===
    let gateway: Arc<dyn ModelGateway> = if cli.dry_run {
        info!("Dry run: using echo gateway");
        Arc::new(EchoGateway::new())
    } else {
        build_gateway(&config.gateway)?
    };
    let dispatcher = Arc::new(FlowDispatcher::with_default_processors(gateway));

    if cli.list_flows {
        list_flows(&dispatcher, defaults.flow_type);
        return Ok(());
    }

    let prompt = match &cli.prompt {
        Some(p) => p.clone(),
        None => bail!("A prompt is required. Use --list-flows to see the available flows."),
    };

    let flow_type = cli
        .flow
        .as_deref()
        .map(str::parse::<FlowType>)
        .transpose()?;

    let configuration: FlowConfiguration = cli
        .set
        .iter()
        .cloned()
        .collect::<std::collections::BTreeMap<_, _>>()
        .into();

    let context = match &cli.context {
        Some(path) => TranscriptContextLoader::new().load(path)?,
        None => PromptContext::empty(),
    };

    let logger: Arc<dyn FlowLogger> = match config
        .logging
        .transcript_path(&chrono::Local::now().format("%Y%m%d-%H%M%S").to_string())
        .and_then(JsonlFlowLogger::new)
    {
        Some(logger) => {
            info!("Writing flow transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoFlowLogger),
    };

    let mut input = RunFlowInput::new(prompt)
        .with_configuration(configuration)
        .with_context(context);
    if let Some(flow_type) = flow_type {
        input = input.with_flow_type(flow_type);
    }

    let use_case = RunFlowUseCase::new(dispatcher)
        .with_defaults(defaults)
        .with_logger(logger);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    if !config.output.color {
        set_color_enabled(false);
    }

    // Execute with or without progress reporting
    let show_progress = !cli.quiet && config.output.show_progress && format != OutputFormat::Json;
    let result = if show_progress && std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else if show_progress {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    } else {
        use_case.execute(input).await?
    };

    let output = ConsoleFormatter
        .render(&result, format)
        .context("Failed to serialize flow result")?;
    println!("{}", output);

    Ok(())
}
