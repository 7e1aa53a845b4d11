//! Tool availability port
//!
//! Checks whether a tool's executable can be found and, optionally, tries
//! a one-shot install when it cannot.

use async_trait::async_trait;

/// Port for ensuring a registered tool can be executed.
///
/// This is the only component allowed to change system package state, and
/// only as a fallback. It is consulted once per run, before any file is
/// processed.
#[async_trait]
pub trait ToolAvailabilityPort: Send + Sync {
    /// Returns `true` when the tool's executable is resolvable on the search
    /// path, after at most one install attempt. Unknown keys return `false`.
    async fn ensure_available(&self, tool_key: &str) -> bool;
}
