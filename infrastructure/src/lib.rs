//! Infrastructure layer for forensic-launcher
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod paths;
pub mod tools;


// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileInstallConfig,
    FileOutputConfig, FileOutputFormat, FileToolConfig,
};
pub use logging::JsonlAuditLogger;
pub use paths::LocalPathResolver;
pub use tools::{
    FileCommandClassifier, PackageManager, ProcessToolRunner, SystemToolGuard, ToolHelpReader,
    default_tool_registry,
};
