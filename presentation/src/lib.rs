//! Presentation layer for forensic-launcher
//!
//! This crate contains CLI definitions, report and catalog formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::catalog::{CatalogFormatter, HELP_EXCERPT_LINES};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::set_color_enabled;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
