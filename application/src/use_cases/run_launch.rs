//! Run Launch use case
//!
//! Orchestrates one launcher run:
//!
//! 1. Argument filter (fatal on rejection)
//! 2. Path resolution (fatal when nothing resolves)
//! 3. Tool availability guard, once per run
//! 4. Per file: classify, then execute
//! 5. Aggregate into a [`Report`]

use crate::config::BehaviorConfig;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLog};
use crate::ports::file_classifier::FileClassifierPort;
use crate::ports::path_resolver::PathResolverPort;
use crate::ports::progress::{LaunchProgressNotifier, NoProgress};
use crate::ports::tool_availability::ToolAvailabilityPort;
use crate::ports::tool_runner::ToolRunnerPort;
use futures::stream::{self, StreamExt};
use launcher_domain::{
    ArgumentRejected, ExecutionError, ExecutionResult, PathSources, Report, SafeArgs,
    ToolInvocationRequest, check_arguments,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop a run before any subprocess is spawned
#[derive(Error, Debug)]
pub enum RunLaunchError {
    #[error(transparent)]
    ArgumentRejected(#[from] ArgumentRejected),

    #[error("no input files could be resolved ({} unresolved)", .missing.len())]
    NoFilesResolved { missing: Vec<PathBuf> },
}

/// Input for the RunLaunch use case
#[derive(Debug, Clone)]
pub struct RunLaunchInput {
    /// Registry key of the tool to run
    pub tool_key: String,
    /// Raw tool arguments, not yet filtered
    pub tool_args: Vec<String>,
    /// Where the target files come from
    pub sources: PathSources,
}

impl RunLaunchInput {
    pub fn new(tool_key: impl Into<String>, sources: PathSources) -> Self {
        Self {
            tool_key: tool_key.into(),
            tool_args: Vec::new(),
            sources,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tool_args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Use case for running one tool over a resolved file set
pub struct RunLaunchUseCase {
    resolver: Arc<dyn PathResolverPort>,
    guard: Arc<dyn ToolAvailabilityPort>,
    classifier: Arc<dyn FileClassifierPort>,
    runner: Arc<dyn ToolRunnerPort>,
    audit: Arc<dyn AuditLogger>,
    behavior: BehaviorConfig,
}

impl RunLaunchUseCase {
    pub fn new(
        resolver: Arc<dyn PathResolverPort>,
        guard: Arc<dyn ToolAvailabilityPort>,
        classifier: Arc<dyn FileClassifierPort>,
        runner: Arc<dyn ToolRunnerPort>,
    ) -> Self {
        Self {
            resolver,
            guard,
            classifier,
            runner,
            audit: Arc::new(NoAuditLog),
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunLaunchInput) -> Result<Report, RunLaunchError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunLaunchInput,
        progress: &dyn LaunchProgressNotifier,
    ) -> Result<Report, RunLaunchError> {
        let args = match check_arguments(&input.tool_args) {
            Ok(args) => args,
            Err(e) => {
                warn!("Rejected tool argument '{}' (matched '{}')", e.argument, e.pattern);
                self.audit
                    .log(AuditEvent::argument_rejected(&e.argument, e.pattern));
                return Err(e.into());
            }
        };

        let resolved = self.resolver.resolve(&input.sources);
        for missing in &resolved.missing {
            warn!("Input not resolved: {}", missing.display());
        }
        if resolved.is_empty() {
            return Err(RunLaunchError::NoFilesResolved {
                missing: resolved.missing,
            });
        }

        info!(
            "Running '{}' on {} file(s) with {} argument(s)",
            input.tool_key,
            resolved.len(),
            args.len()
        );

        let available = self.guard.ensure_available(&input.tool_key).await;
        self.audit
            .log(AuditEvent::tool_availability(&input.tool_key, available));
        if !available {
            warn!(
                "Tool '{}' is unavailable; every file will report it",
                input.tool_key
            );
        }

        progress.on_run_start(&input.tool_key, resolved.len());

        let jobs = self.behavior.jobs.max(1);
        debug!("Processing files with concurrency {}", jobs);

        // `buffered` yields in input order regardless of completion order.
        let results: Vec<ExecutionResult> = stream::iter(resolved.paths.iter())
            .map(|path| self.process_file(&input.tool_key, path, &args, available, progress))
            .buffered(jobs)
            .collect()
            .await;

        let report = Report::aggregate(input.tool_key, results, resolved.missing);
        info!(
            "Run complete: {} succeeded, {} failed",
            report.succeeded_count(),
            report.failed_count()
        );
        progress.on_run_complete(&report);

        Ok(report)
    }

    async fn process_file(
        &self,
        tool_key: &str,
        path: &Path,
        args: &SafeArgs,
        available: bool,
        progress: &dyn LaunchProgressNotifier,
    ) -> ExecutionResult {
        progress.on_file_start(path);

        let request = ToolInvocationRequest::new(tool_key, path, args.clone());
        let classification = self.classifier.classify(path).await;

        let result = if available {
            self.runner.execute(&request, classification).await
        } else {
            ExecutionResult::failure(
                &request,
                classification,
                ExecutionError::tool_unavailable(tool_key),
            )
        };

        match &result.error {
            None => debug!("{}: ok", path.display()),
            Some(e) => debug!("{}: {}", path.display(), e),
        }
        progress.on_file_complete(&result);
        self.audit.log(AuditEvent::execution_result(&result));

        result
    }
}
