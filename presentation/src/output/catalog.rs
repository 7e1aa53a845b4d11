//! Tool catalog rendering for `--list-tools` and `--tool-help`

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use launcher_domain::ToolEntry;

/// Lines of help shown per tool in the short listing
pub const HELP_EXCERPT_LINES: usize = 12;

/// Renders the known tools together with help text gathered by the caller.
pub struct CatalogFormatter;

impl CatalogFormatter {
    /// Short listing: key, description and a help excerpt per tool.
    pub fn tool_list(tools: &[(&ToolEntry, String)]) -> String {
        let mut output = format!("{}\n", "Available tools".cyan().bold());

        for (entry, help) in tools {
            output.push_str(&Self::tool_heading(entry));
            output.push_str(&ConsoleFormatter::indent(help, "    "));
            output.push('\n');
        }

        output
    }

    /// Full help and usage examples per tool.
    pub fn tool_help(tools: &[(&ToolEntry, String)]) -> String {
        let mut output = String::new();

        for (entry, help) in tools {
            output.push_str(&Self::tool_heading(entry));
            output.push_str(&format!(
                "  {} {} (package: {})\n",
                "Command:".bold(),
                entry.command,
                entry.package
            ));
            output.push_str(&format!("{}\n", "-".repeat(40)));
            output.push_str(&ConsoleFormatter::indent(help, "    "));
            output.push('\n');

            if !entry.examples.is_empty() {
                output.push_str(&format!("  {}\n", "Examples:".green().bold()));
                for example in &entry.examples {
                    output.push_str(&format!("    $ {}\n", example));
                }
            }
        }

        output
    }

    fn tool_heading(entry: &ToolEntry) -> String {
        format!("\n{} - {}\n", entry.key.yellow().bold(), entry.description)
    }
}
