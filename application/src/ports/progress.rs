//! Progress notification port
//!
//! Defines the interface for reporting progress during a launcher run.

use launcher_domain::{ExecutionResult, Report};
use std::path::Path;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait LaunchProgressNotifier: Send + Sync {
    /// Called once the file set is known
    fn on_run_start(&self, tool: &str, total_files: usize);

    /// Called before a file is classified and executed
    fn on_file_start(&self, _path: &Path) {}

    /// Called when a file's result is available
    fn on_file_complete(&self, result: &ExecutionResult);

    /// Called after aggregation
    fn on_run_complete(&self, report: &Report);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LaunchProgressNotifier for NoProgress {
    fn on_run_start(&self, _tool: &str, _total_files: usize) {}
    fn on_file_complete(&self, _result: &ExecutionResult) {}
    fn on_run_complete(&self, _report: &Report) {}
}
