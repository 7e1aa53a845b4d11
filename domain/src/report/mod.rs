//! Result aggregation
//!
//! A [`Report`] is the ordered collection of every [`ExecutionResult`] of a
//! run plus the inputs that never resolved. Aggregation never filters:
//! failed results are kept, and a report with zero successes is still a
//! valid report.

use crate::execution::ExecutionResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Final aggregate of a launcher run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// RFC 3339 timestamp of aggregation
    pub generated_at: String,
    /// Tool key the run used
    pub tool: String,
    /// Results in resolution order
    pub results: Vec<ExecutionResult>,
    /// Inputs that did not resolve to a regular file
    #[serde(with = "crate::path_serde::list")]
    pub missing: Vec<PathBuf>,
}

impl Report {
    /// Collect results into a report, preserving their order.
    pub fn aggregate(
        tool: impl Into<String>,
        results: Vec<ExecutionResult>,
        missing: Vec<PathBuf>,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            tool: tool.into(),
            results,
            missing,
        }
    }

    pub fn succeeded_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.succeeded_count()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Serialize as pretty-printed JSON (lossless, including paths that
    /// are not valid UTF-8).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
