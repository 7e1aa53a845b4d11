//! Domain layer for forensic-launcher
//!
//! Pure types for the input-resolution and execution-safety pipeline. This
//! crate performs no I/O; filesystem and process access live in the
//! infrastructure layer.
//!
//! # Pipeline
//!
//! ```text
//! PathSources ──▶ ResolvedPathSet ─┐
//!                                  ├─▶ ToolInvocationRequest ──▶ ExecutionResult ──▶ Report
//! raw args ─────▶ SafeArgs ────────┘
//! ```
//!
//! - [`safety`]: denylist filter producing [`SafeArgs`]
//! - [`target`]: [`ResolvedPathSet`] and its deduplicating builder
//! - [`tool`]: the injected [`ToolRegistry`]
//! - [`execution`]: request, classification and result types
//! - [`report`]: the ordered [`Report`]

pub mod config;
pub mod execution;
pub mod path_serde;
pub mod report;
pub mod safety;
pub mod target;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use execution::{
    ExecutionError, ExecutionErrorKind, ExecutionResult, FileClassification,
    ToolInvocationRequest,
};
pub use report::Report;
pub use safety::{ArgumentRejected, DENYLIST, SafeArgs, check_arguments};
pub use target::{PathSources, ResolvedPathSet, ResolvedPathSetBuilder};
pub use tool::{ToolEntry, ToolRegistry};
