//! Subprocess execution engine
//!
//! Runs one registered tool against one file:
//!
//! ```text
//! <command> <args...> <file>
//! ```
//!
//! The argument vector goes straight to process creation; no shell is
//! involved, so metacharacters in arguments are never interpreted. The
//! file path is always the last argument.

use async_trait::async_trait;
use launcher_application::ports::tool_runner::ToolRunnerPort;
use launcher_domain::{
    ExecutionError, ExecutionResult, FileClassification, ToolInvocationRequest, ToolRegistry,
};
use std::io::ErrorKind;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

/// Execution engine that spawns registered tools as subprocesses.
///
/// No timeout and no retries: a hung tool blocks its file until it exits,
/// and a failed run is reported once.
pub struct ProcessToolRunner {
    registry: Arc<ToolRegistry>,
}

impl ProcessToolRunner {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    fn build_command(program: &str, request: &ToolInvocationRequest) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(request.args.as_slice())
            .arg(&request.file_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Linux: request kernel to send SIGTERM to child when parent dies.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        cmd
    }
}

#[async_trait]
impl ToolRunnerPort for ProcessToolRunner {
    async fn execute(
        &self,
        request: &ToolInvocationRequest,
        classification: FileClassification,
    ) -> ExecutionResult {
        let Some(entry) = self.registry.get(&request.tool_key) else {
            return ExecutionResult::failure(
                request,
                classification,
                ExecutionError::tool_unavailable(&request.tool_key),
            );
        };

        if !request.file_path.is_file() {
            return ExecutionResult::failure(
                request,
                classification,
                ExecutionError::path_not_found(&request.file_path),
            );
        }

        debug!(
            "Spawning {} {:?} {}",
            entry.command,
            request.args.as_slice(),
            request.file_path.display()
        );

        let start = Instant::now();
        let output = match Self::build_command(&entry.command, request).output().await {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return ExecutionResult::failure(
                    request,
                    classification,
                    ExecutionError::tool_unavailable(&request.tool_key),
                );
            }
            Err(e) => {
                return ExecutionResult::failure(
                    request,
                    classification,
                    ExecutionError::execution_fault(e),
                );
            }
        };
        let duration_ms = start.elapsed().as_millis() as u64;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let result = if output.status.success() {
            ExecutionResult::success(request, classification)
        } else {
            ExecutionResult::failure(
                request,
                classification,
                ExecutionError::non_zero_exit(output.status.code()),
            )
        };

        result.with_output(stdout, stderr).with_duration(duration_ms)
    }
}
