//! Port for structured audit logging.
//!
//! Defines the [`AuditLogger`] trait for recording what a run did
//! (rejected arguments, tool availability decisions, every execution) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps a durable
//! record of every subprocess the launcher ran against evidence files.

use serde_json::{Value, json};

/// A structured audit event.
pub struct AuditEvent {
    /// Event type identifier (e.g., "execution_result").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn argument_rejected(argument: &str, pattern: &str) -> Self {
        Self::new(
            "argument_rejected",
            json!({ "argument": argument, "pattern": pattern }),
        )
    }

    pub fn tool_availability(tool: &str, available: bool) -> Self {
        Self::new(
            "tool_availability",
            json!({ "tool": tool, "available": available }),
        )
    }

    /// The full result; should encoding ever fail, the record still names
    /// the file and the reason instead of going blank.
    pub fn execution_result(result: &launcher_domain::ExecutionResult) -> Self {
        let payload = serde_json::to_value(result).unwrap_or_else(|e| {
            json!({
                "file": result.file.to_string_lossy(),
                "tool": result.tool,
                "succeeded": result.succeeded,
                "encoding_error": e.to_string(),
            })
        });
        Self::new("execution_result", payload)
    }
}

/// Port for logging audit events.
///
/// `log` is synchronous and non-fallible so that a broken log sink cannot
/// interrupt a run; implementations swallow their own write errors.
pub trait AuditLogger: Send + Sync {
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLog;

impl AuditLogger for NoAuditLog {
    fn log(&self, _event: AuditEvent) {}
}
