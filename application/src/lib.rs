//! Application layer for forensic-launcher
//!
//! This crate contains the run use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    audit_log::{AuditEvent, AuditLogger, NoAuditLog},
    file_classifier::FileClassifierPort,
    path_resolver::PathResolverPort,
    progress::{LaunchProgressNotifier, NoProgress},
    tool_availability::ToolAvailabilityPort,
    tool_runner::ToolRunnerPort,
};
pub use use_cases::run_launch::{RunLaunchError, RunLaunchInput, RunLaunchUseCase};
