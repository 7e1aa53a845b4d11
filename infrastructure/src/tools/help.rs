//! Help text retrieval for registered tools

use launcher_domain::ToolRegistry;
use std::io::ErrorKind;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

/// Reads a tool's own help output by running `<command> <help_args>`.
///
/// Always yields displayable text: failures become a short message
/// instead of an error, since the catalog lists every tool regardless of
/// whether it is installed.
pub struct ToolHelpReader {
    registry: Arc<ToolRegistry>,
}

impl ToolHelpReader {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Help text for `key`, cut to the first `limit` lines when given.
    pub async fn help_text(&self, key: &str, limit: Option<usize>) -> String {
        let Some(entry) = self.registry.get(key) else {
            return format!("Unknown tool '{}'.", key);
        };

        let output = Command::new(&entry.command)
            .args(&entry.help_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return format!(
                    "'{}' is not installed (package: {}).",
                    entry.command, entry.package
                );
            }
            Err(e) => {
                debug!("Help for {} failed: {}", key, e);
                return format!("Could not retrieve help for '{}': {}", key, e);
            }
        };

        // Plenty of tools print usage on stderr and exit non-zero.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            stdout.into_owned()
        };

        if text.trim().is_empty() {
            return format!("'{}' printed no help text.", entry.command);
        }

        match limit {
            Some(n) => truncate_lines(&text, n),
            None => text.trim_end().to_string(),
        }
    }
}

fn truncate_lines(text: &str, limit: usize) -> String {
    let mut lines = text.lines();
    let mut kept: Vec<&str> = lines.by_ref().take(limit).collect();
    while kept.last().is_some_and(|l| l.trim().is_empty()) {
        kept.pop();
    }
    let mut out = kept.join("\n");
    if lines.next().is_some() {
        out.push_str("\n...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_domain::ToolEntry;

    fn reader() -> ToolHelpReader {
        ToolHelpReader::new(Arc::new(
            ToolRegistry::new()
                .register(
                    ToolEntry::new("printer", "Prints lines")
                        .with_command("printf")
                        .with_help_args(["l1\\nl2\\nl3\\nl4\\n"]),
                )
                .register(
                    ToolEntry::new("noisy", "Help on stderr")
                        .with_command("sh")
                        .with_help_args(["-c", "echo usage: noisy >&2; exit 1"]),
                )
                .register(
                    ToolEntry::new("silent", "No output")
                        .with_command("true")
                        .with_help_args(Vec::<String>::new()),
                )
                .register(
                    ToolEntry::new("ghost", "Not installed")
                        .with_command("forensic-launcher-no-such-tool")
                        .with_package("ghost-pkg"),
                ),
        ))
    }

    #[tokio::test]
    async fn test_full_help_text() {
        assert_eq!(reader().help_text("printer", None).await, "l1\nl2\nl3\nl4");
    }

    #[tokio::test]
    async fn test_help_text_truncated() {
        assert_eq!(reader().help_text("printer", Some(2)).await, "l1\nl2\n...");
        assert_eq!(reader().help_text("printer", Some(10)).await, "l1\nl2\nl3\nl4");
    }

    #[tokio::test]
    async fn test_falls_back_to_stderr() {
        assert_eq!(reader().help_text("noisy", None).await, "usage: noisy");
    }

    #[tokio::test]
    async fn test_empty_output_message() {
        let text = reader().help_text("silent", None).await;
        assert!(text.contains("no help text"));
    }

    #[tokio::test]
    async fn test_missing_executable_message() {
        let text = reader().help_text("ghost", None).await;
        assert!(text.contains("not installed"));
        assert!(text.contains("ghost-pkg"));
    }

    #[tokio::test]
    async fn test_unknown_tool_message() {
        assert_eq!(
            reader().help_text("nope", None).await,
            "Unknown tool 'nope'."
        );
    }

    #[test]
    fn test_truncate_drops_trailing_blank_lines() {
        assert_eq!(truncate_lines("a\n\n\nb", 3), "a\n...");
        assert_eq!(truncate_lines("a\nb\n", 5), "a\nb");
    }
}
