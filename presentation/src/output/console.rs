//! Console output formatter for launcher reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use launcher_domain::{ExecutionResult, Report};

/// Formats launcher reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report, one block per file
    pub fn format(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Tool: {}", report.tool)));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Generated:".cyan().bold(),
            report.generated_at
        ));

        for result in &report.results {
            output.push_str(&Self::file_block(result));
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Succeeded:".green().bold(),
            report.succeeded_count(),
            "Failed:".red().bold(),
            report.failed_count()
        ));

        if !report.missing.is_empty() {
            output.push_str(&format!("\n{}\n", "Not resolved:".yellow().bold()));
            for path in &report.missing {
                output.push_str(&format!("  * {}\n", path.display()));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &Report) -> serde_json::Result<String> {
        report.to_json()
    }

    fn file_block(result: &ExecutionResult) -> String {
        let mut block = String::new();
        let title = format!("── {} ──", result.file.display());

        if result.succeeded {
            block.push_str(&format!("\n{}\n", title.yellow().bold()));
            block.push_str(&format!("{} {}\n", "Status:".bold(), "ok".green()));
        } else {
            block.push_str(&format!("\n{}\n", title.red().bold()));
            let reason = result
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "failed".to_string());
            block.push_str(&format!("{} {}\n", "Status:".bold(), reason.red()));
        }

        let class = &result.classification;
        block.push_str(&format!(
            "{} {} ({})\n",
            "Type:".bold(),
            class.description.as_deref().unwrap_or("unknown"),
            class
                .extension
                .as_deref()
                .map(|e| format!(".{}", e))
                .unwrap_or_else(|| "no extension".to_string())
        ));

        if !result.args.is_empty() {
            block.push_str(&format!("{} {}\n", "Args:".bold(), result.args.join(" ")));
        }
        if let Some(ms) = result.duration_ms {
            block.push_str(&format!("{} {} ms\n", "Time:".bold(), ms));
        }

        if !result.stdout.trim().is_empty() {
            block.push_str(&format!("{}\n", "stdout:".cyan()));
            block.push_str(&Self::indent(result.stdout.trim_end(), "  "));
            block.push('\n');
        }
        if !result.stderr.trim().is_empty() {
            block.push_str(&format!("{}\n", "stderr:".magenta()));
            block.push_str(&Self::indent(result.stderr.trim_end(), "  "));
            block.push('\n');
        }

        block
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &Report) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &Report) -> serde_json::Result<String> {
        Self::format_json(report)
    }
}
