//! Execution result value objects: the immutable outcome of one run

use super::classification::FileClassification;
use super::request::ToolInvocationRequest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Category of a per-file execution failure.
///
/// | Kind | Raised when |
/// |------|-------------|
/// | `PathNotFound` | The file vanished or is not a regular file |
/// | `ToolUnavailable` | Unknown tool key, or executable missing at spawn |
/// | `NonZeroExit` | The tool ran and exited non-zero (or was signalled) |
/// | `ExecutionFault` | Any other spawn/wait failure |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionErrorKind {
    PathNotFound,
    ToolUnavailable,
    NonZeroExit {
        /// Exit code; `None` when the process was terminated by a signal
        status: Option<i32>,
    },
    ExecutionFault,
}

impl ExecutionErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ExecutionErrorKind::PathNotFound => "path_not_found",
            ExecutionErrorKind::ToolUnavailable => "tool_unavailable",
            ExecutionErrorKind::NonZeroExit { .. } => "non_zero_exit",
            ExecutionErrorKind::ExecutionFault => "execution_fault",
        }
    }
}

impl std::fmt::Display for ExecutionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error recorded in an [`ExecutionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{kind}] {message}")]
pub struct ExecutionError {
    #[serde(flatten)]
    pub kind: ExecutionErrorKind,
    /// Human-readable message
    pub message: String,
}

impl ExecutionError {
    pub fn new(kind: ExecutionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn path_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ExecutionErrorKind::PathNotFound,
            format!(
                "path not found or not a regular file: {}",
                path.as_ref().display()
            ),
        )
    }

    pub fn tool_unavailable(tool: impl AsRef<str>) -> Self {
        Self::new(
            ExecutionErrorKind::ToolUnavailable,
            format!("tool '{}' is not available on this system", tool.as_ref()),
        )
    }

    pub fn non_zero_exit(status: Option<i32>) -> Self {
        let message = match status {
            Some(code) => format!("tool exited with non-zero status ({})", code),
            None => "tool was terminated by a signal".to_string(),
        };
        Self::new(ExecutionErrorKind::NonZeroExit { status }, message)
    }

    pub fn execution_fault(message: impl std::fmt::Display) -> Self {
        Self::new(
            ExecutionErrorKind::ExecutionFault,
            format!("failed to execute tool: {}", message),
        )
    }
}

/// Outcome of running one tool against one file.
///
/// Created by the execution engine, never mutated after it is returned,
/// and consumed once by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(with = "crate::path_serde")]
    pub file: PathBuf,
    pub tool: String,
    pub args: Vec<String>,
    pub stdout: String,
    pub stderr: String,
    /// True iff the subprocess exited with status zero
    pub succeeded: bool,
    pub error: Option<ExecutionError>,
    pub classification: FileClassification,
    /// Wall time of the subprocess, when one was spawned
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

impl ExecutionResult {
    /// Successful run with empty streams.
    pub fn success(request: &ToolInvocationRequest, classification: FileClassification) -> Self {
        Self::base(request, classification, true, None)
    }

    /// Failed run with empty streams.
    pub fn failure(
        request: &ToolInvocationRequest,
        classification: FileClassification,
        error: ExecutionError,
    ) -> Self {
        Self::base(request, classification, false, Some(error))
    }

    fn base(
        request: &ToolInvocationRequest,
        classification: FileClassification,
        succeeded: bool,
        error: Option<ExecutionError>,
    ) -> Self {
        Self {
            file: request.file_path.clone(),
            tool: request.tool_key.clone(),
            args: request.args.as_slice().to_vec(),
            stdout: String::new(),
            stderr: String::new(),
            succeeded,
            error,
            classification,
            duration_ms: None,
        }
    }

    /// Attach captured streams.
    pub fn with_output(mut self, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self.stderr = stderr.into();
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    pub fn error_kind(&self) -> Option<&ExecutionErrorKind> {
        self.error.as_ref().map(|e| &e.kind)
    }
}
