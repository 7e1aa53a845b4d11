//! File classifier backed by `file(1)`

use async_trait::async_trait;
use launcher_application::ports::file_classifier::FileClassifierPort;
use launcher_domain::FileClassification;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Default type-sniffing executable
pub const FILE_COMMAND: &str = "file";

/// Derives the extension from the path and a one-line description from
/// `file -b`.
///
/// The description is skipped when the sniffer is not installed or the
/// path is not a regular file; invocation failures and empty output leave
/// it empty. The failure reason is discarded, the value is advisory.
#[derive(Debug, Clone)]
pub struct FileCommandClassifier {
    program: String,
}

impl Default for FileCommandClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCommandClassifier {
    pub fn new() -> Self {
        Self {
            program: FILE_COMMAND.to_string(),
        }
    }

    /// Use a different sniffer executable (it is called as `<program> -b <path>`).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    async fn describe(&self, path: &Path) -> Option<String> {
        if !path.is_file() || which::which(&self.program).is_err() {
            return None;
        }

        let output = Command::new(&self.program)
            .arg("-b")
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .inspect_err(|e| debug!("{} failed on {}: {}", self.program, path.display(), e))
            .ok()?;

        let description = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!description.is_empty()).then_some(description)
    }
}

#[async_trait]
impl FileClassifierPort for FileCommandClassifier {
    async fn classify(&self, path: &Path) -> FileClassification {
        let description = self.describe(path).await;
        FileClassification::from_path(path).with_description(description)
    }
}
