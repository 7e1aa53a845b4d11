//! Tool adapters
//!
//! Concrete implementations of the tool-facing ports:
//!
//! - [`SystemToolGuard`]: availability check with package-manager fallback
//! - [`FileCommandClassifier`]: extension plus `file(1)` description
//! - [`ProcessToolRunner`]: subprocess execution, no shell
//! - [`ToolHelpReader`]: help text for the tool catalog
//!
//! The built-in set of tools lives in [`default_tool_registry`].

mod availability;
mod classifier;
mod help;
mod registry;
mod runner;

pub use availability::{PackageManager, SystemToolGuard};
pub use classifier::{FILE_COMMAND, FileCommandClassifier};
pub use help::ToolHelpReader;
pub use registry::default_tool_registry;
pub use runner::ProcessToolRunner;
