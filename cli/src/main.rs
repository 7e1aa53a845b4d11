//! CLI entrypoint for Forensic Launcher
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use launcher_application::{
    BehaviorConfig, LaunchProgressNotifier, NoProgress, RunLaunchError, RunLaunchInput,
    RunLaunchUseCase,
};
use launcher_domain::{Report, ToolRegistry};
use launcher_infrastructure::{
    ConfigLoader, FileCommandClassifier, FileConfig, JsonlAuditLogger, LocalPathResolver,
    ProcessToolRunner, SystemToolGuard, ToolHelpReader,
};
use launcher_presentation::{
    CatalogFormatter, Cli, ConsoleFormatter, HELP_EXCERPT_LINES, OutputFormatter,
    ProgressReporter, SimpleProgress, set_color_enabled,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// How a run ended, as seen by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// A report was produced, even if some files failed
    Reported,
    /// The request could not proceed (rejected argument, nothing to inspect, bad config)
    NotProceeded,
    /// No tool selected or unknown tool key
    Usage,
}

impl Outcome {
    fn code(self) -> u8 {
        match self {
            Outcome::Reported => 0,
            Outcome::NotProceeded => 1,
            Outcome::Usage => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if let Some(hint) = Cli::argument_hint(&e) {
                eprintln!("{}", hint);
            }
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    let _log_guard = match init_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Outcome::NotProceeded.into();
        }
    };

    match run(cli).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            Outcome::NotProceeded.into()
        }
    }
}

/// Initialize logging based on verbosity level, optionally teeing into a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let name = path
                .file_name()
                .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run(cli: Cli) -> Result<Outcome> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(Outcome::Reported);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: invalid configuration: {}", e);
                return Ok(Outcome::NotProceeded);
            }
        }
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("Error: invalid configuration: {}", issue);
        }
        return Ok(Outcome::NotProceeded);
    }

    set_color_enabled(config.output.color && cli.output.is_none());

    // === Dependency Injection ===
    let registry = Arc::new(config.tool_registry());

    if cli.list_tools || cli.tool_help {
        print_catalog(&registry, cli.tool_help).await;
        return Ok(Outcome::Reported);
    }

    let tool_key = match select_tool(cli.tool.as_deref(), &registry) {
        Ok(key) => key.to_string(),
        Err(message) => {
            eprintln!("Error: {}", message);
            return Ok(Outcome::Usage);
        }
    };

    info!("Starting Forensic Launcher with tool '{}'", tool_key);

    let use_case = build_use_case(&cli, &config, registry);
    let input = RunLaunchInput::new(tool_key, cli.path_sources()).with_args(cli.tool_args.clone());

    let progress: Box<dyn LaunchProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = use_case.execute_with_progress(input, progress.as_ref()).await;
    let outcome = run_outcome(&result);
    let report = match result {
        Ok(report) => report,
        Err(RunLaunchError::ArgumentRejected(e)) => {
            eprintln!("Error: {} (contains '{}')", e, e.pattern);
            return Ok(outcome);
        }
        Err(RunLaunchError::NoFilesResolved { missing }) => {
            eprintln!("Error: no input files could be resolved");
            for path in &missing {
                eprintln!("  not found: {}", path.display());
            }
            return Ok(outcome);
        }
    };

    let rendered = ConsoleFormatter
        .render(&report, cli.output_format(config.output.format))
        .context("failed to encode report")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(outcome)
}

/// The tool key to run, or a usage message.
fn select_tool<'a>(tool: Option<&'a str>, registry: &ToolRegistry) -> Result<&'a str, String> {
    let Some(key) = tool else {
        return Err("no tool selected. Use -t <KEY>; see --list-tools.".to_string());
    };
    if !registry.contains(key) {
        return Err(format!(
            "unknown tool '{}'. Known tools: {}",
            key,
            registry.keys().collect::<Vec<_>>().join(", ")
        ));
    }
    Ok(key)
}

/// A produced report is success regardless of per-file failures.
fn run_outcome(result: &Result<Report, RunLaunchError>) -> Outcome {
    match result {
        Ok(_) => Outcome::Reported,
        Err(RunLaunchError::ArgumentRejected(_) | RunLaunchError::NoFilesResolved { .. }) => {
            Outcome::NotProceeded
        }
    }
}

fn build_use_case(cli: &Cli, config: &FileConfig, registry: Arc<ToolRegistry>) -> RunLaunchUseCase {
    let guard = SystemToolGuard::new(registry.clone())
        .with_package_manager(config.install.to_package_manager())
        .with_auto_install(config.install.enabled && !cli.no_install);

    let behavior = cli
        .jobs
        .map(BehaviorConfig::with_jobs)
        .unwrap_or_else(|| config.behavior.to_behavior_config());

    let mut use_case = RunLaunchUseCase::new(
        Arc::new(LocalPathResolver::new()),
        Arc::new(guard),
        Arc::new(FileCommandClassifier::new()),
        Arc::new(ProcessToolRunner::new(registry)),
    )
    .with_behavior(behavior);

    if let Some(path) = &cli.audit_log {
        match JsonlAuditLogger::new(path) {
            Some(logger) => use_case = use_case.with_audit_logger(Arc::new(logger)),
            None => warn!("Audit log disabled: cannot open {}", path.display()),
        }
    }

    use_case
}

async fn print_catalog(registry: &Arc<ToolRegistry>, full: bool) {
    let reader = ToolHelpReader::new(registry.clone());
    let limit = (!full).then_some(HELP_EXCERPT_LINES);

    let mut tools = Vec::with_capacity(registry.len());
    for entry in registry.entries() {
        tools.push((entry, reader.help_text(&entry.key, limit).await));
    }

    let text = if full {
        CatalogFormatter::tool_help(&tools)
    } else {
        CatalogFormatter::tool_list(&tools)
    };
    println!("{}", text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_domain::{
        ExecutionError, ExecutionResult, FileClassification, SafeArgs, ToolEntry,
        ToolInvocationRequest, check_arguments,
    };
    use std::path::PathBuf;

    fn registry() -> ToolRegistry {
        ToolRegistry::new()
            .register(ToolEntry::new("xxd", "Hexadecimal dump."))
            .register(ToolEntry::new("strings", "Extract printable strings."))
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Reported.code(), 0);
        assert_eq!(Outcome::NotProceeded.code(), 1);
        assert_eq!(Outcome::Usage.code(), 2);
    }

    #[test]
    fn test_missing_tool_is_usage_error() {
        let err = select_tool(None, &registry()).unwrap_err();
        assert!(err.contains("no tool selected"));
    }

    #[test]
    fn test_unknown_tool_is_usage_error() {
        let err = select_tool(Some("radare2"), &registry()).unwrap_err();
        assert!(err.contains("unknown tool 'radare2'"));
        assert!(err.contains("xxd, strings"));
    }

    #[test]
    fn test_known_tool_selected() {
        assert_eq!(select_tool(Some("xxd"), &registry()), Ok("xxd"));
    }

    #[test]
    fn test_report_with_failures_exits_zero() {
        let request = ToolInvocationRequest::new("xxd", "/c/a.bin", SafeArgs::empty());
        let failed = ExecutionResult::failure(
            &request,
            FileClassification::default(),
            ExecutionError::non_zero_exit(Some(1)),
        );
        let result = Ok(Report::aggregate("xxd", vec![failed], vec![]));

        assert_eq!(run_outcome(&result), Outcome::Reported);
    }

    #[test]
    fn test_halted_runs_exit_one() {
        let rejected = check_arguments(&["a;b"]).unwrap_err();
        assert_eq!(
            run_outcome(&Err(RunLaunchError::ArgumentRejected(rejected))),
            Outcome::NotProceeded
        );
        assert_eq!(
            run_outcome(&Err(RunLaunchError::NoFilesResolved {
                missing: vec![PathBuf::from("/c/gone")],
            })),
            Outcome::NotProceeded
        );
    }
}
