//! Tool runner port
//!
//! Defines the interface for running one tool against one file.

use async_trait::async_trait;
use launcher_domain::{ExecutionResult, FileClassification, ToolInvocationRequest};

/// Port for tool execution
///
/// Implementations (adapters) live in the infrastructure layer. Every call
/// produces exactly one [`ExecutionResult`]; failures are recorded in the
/// result rather than returned as errors, and nothing is retried.
#[async_trait]
pub trait ToolRunnerPort: Send + Sync {
    /// Run the request, attaching `classification` to the result whatever
    /// the outcome.
    async fn execute(
        &self,
        request: &ToolInvocationRequest,
        classification: FileClassification,
    ) -> ExecutionResult;
}
