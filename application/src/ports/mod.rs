//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod audit_log;
pub mod file_classifier;
pub mod path_resolver;
pub mod progress;
pub mod tool_availability;
pub mod tool_runner;
