//! Execution domain module
//!
//! Types that flow through one (tool, file) execution:
//!
//! ```text
//! ┌─────────────────────┐   ┌────────────────────┐   ┌─────────────────┐
//! │ ToolInvocationReq.  │──▶│ FileClassification │──▶│ ExecutionResult │
//! │ tool + file + Safe  │   │ ext + `file -b`    │   │ streams/status  │
//! └─────────────────────┘   └────────────────────┘   └─────────────────┘
//! ```
//!
//! Every per-file failure is captured as an [`ExecutionError`] inside the
//! result; none of them interrupt processing of the remaining files.

pub mod classification;
pub mod request;
pub mod result;

pub use classification::FileClassification;
pub use request::ToolInvocationRequest;
pub use result::{ExecutionError, ExecutionErrorKind, ExecutionResult};
