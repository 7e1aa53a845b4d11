//! Progress reporting for launcher runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use launcher_application::ports::progress::LaunchProgressNotifier;
use launcher_domain::{ExecutionResult, Report};
use std::sync::Mutex;

/// Reports progress with a single bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn file_name(result: &ExecutionResult) -> String {
        result
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| result.file.display().to_string())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchProgressNotifier for ProgressReporter {
    fn on_run_start(&self, tool: &str, total_files: usize) {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(tool.to_string());
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_file_complete(&self, result: &ExecutionResult) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if result.succeeded {
                format!("{} {}", "v".green(), Self::file_name(result))
            } else {
                format!("{} {}", "x".red(), Self::file_name(result))
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_run_complete(&self, report: &Report) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut bar| bar.take()) {
            pb.finish_with_message(format!(
                "{} ({} ok, {} failed)",
                "done".green(),
                report.succeeded_count(),
                report.failed_count()
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl LaunchProgressNotifier for SimpleProgress {
    fn on_run_start(&self, tool: &str, total_files: usize) {
        eprintln!("{} {} ({} files)", "->".cyan(), tool.bold(), total_files);
    }

    fn on_file_complete(&self, result: &ExecutionResult) {
        if result.succeeded {
            eprintln!("  {} {}", "v".green(), result.file.display());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), result.file.display());
        }
    }

    fn on_run_complete(&self, _report: &Report) {
        eprintln!();
    }
}
