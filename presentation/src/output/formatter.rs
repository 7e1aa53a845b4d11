//! Output formatter trait

use launcher_domain::{OutputFormat, Report};

/// Trait for formatting launcher reports
pub trait OutputFormatter {
    /// Format the report as human-readable text
    fn format(&self, report: &Report) -> String;

    /// Format as JSON
    fn format_json(&self, report: &Report) -> serde_json::Result<String>;

    /// Format in the requested output format
    fn render(&self, report: &Report, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.format(report)),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
