//! Tool availability guard
//!
//! Checks the search path for a tool's executable and, when it is missing,
//! makes one best-effort install attempt through a package manager:
//!
//! ```text
//! which(cmd) ──found──▶ true
//!     │
//!   missing ──▶ auto-install disabled? ──▶ false
//!     │
//!     ▼
//! <pm> update ──fail──▶ false
//!     │
//! <pm> install -y <package> ──▶ which(cmd) ──▶ true / false
//! ```
//!
//! A successful install step is not trusted on its own: the executable
//! must be found afterwards, since a package may install under a different
//! name than the one registered.

use async_trait::async_trait;
use launcher_application::ports::tool_availability::ToolAvailabilityPort;
use launcher_domain::{ToolEntry, ToolRegistry};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Package manager invocation used for the install fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    /// Executable (e.g., "apt-get")
    pub program: String,
    /// Arguments that refresh the package index
    pub refresh_args: Vec<String>,
    /// Arguments placed before the package name on install
    pub install_args: Vec<String>,
}

impl Default for PackageManager {
    fn default() -> Self {
        Self {
            program: "apt-get".to_string(),
            refresh_args: vec!["update".to_string()],
            install_args: vec!["install".to_string(), "-y".to_string()],
        }
    }
}

/// Availability guard backed by `which` and a package manager.
pub struct SystemToolGuard {
    registry: Arc<ToolRegistry>,
    package_manager: PackageManager,
    auto_install: bool,
}

impl SystemToolGuard {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            package_manager: PackageManager::default(),
            auto_install: true,
        }
    }

    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    /// Enable or disable the install fallback.
    pub fn with_auto_install(mut self, enabled: bool) -> Self {
        self.auto_install = enabled;
        self
    }

    /// Check if a CLI command is available
    pub fn is_command_available(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// One install attempt. Returns whether the executable is found
    /// afterwards.
    async fn try_install(&self, entry: &ToolEntry) -> bool {
        let pm = &self.package_manager;
        if !Self::is_command_available(&pm.program) {
            warn!("Package manager '{}' is not available", pm.program);
            return false;
        }

        info!(
            "Tool '{}' not found, installing package '{}' with {}",
            entry.command, entry.package, pm.program
        );

        if !self.run_package_manager(&pm.refresh_args, None).await {
            warn!("Could not refresh the package index with {}", pm.program);
            return false;
        }

        if !self
            .run_package_manager(&pm.install_args, Some(&entry.package))
            .await
        {
            warn!("Could not install package '{}'", entry.package);
            return false;
        }

        let found = Self::is_command_available(&entry.command);
        if found {
            info!("Tool '{}' installed", entry.command);
        } else {
            warn!(
                "Package '{}' installed but '{}' is still not on the search path",
                entry.package, entry.command
            );
        }
        found
    }

    async fn run_package_manager(&self, args: &[String], package: Option<&str>) -> bool {
        let mut cmd = Command::new(&self.package_manager.program);
        cmd.args(args)
            .args(package)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        match cmd.output().await {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                debug!(
                    "{} exited with {}: {}",
                    self.package_manager.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                false
            }
            Err(e) => {
                warn!("Failed to run {}: {}", self.package_manager.program, e);
                false
            }
        }
    }
}

#[async_trait]
impl ToolAvailabilityPort for SystemToolGuard {
    async fn ensure_available(&self, tool_key: &str) -> bool {
        let Some(entry) = self.registry.get(tool_key) else {
            warn!("Unknown tool '{}'", tool_key);
            return false;
        };

        if Self::is_command_available(&entry.command) {
            debug!("Tool '{}' found on search path", entry.command);
            return true;
        }

        if !self.auto_install {
            warn!(
                "Tool '{}' not found and auto-install is disabled",
                entry.command
            );
            return false;
        }

        self.try_install(entry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "forensic-launcher-no-such-tool";

    fn registry() -> Arc<ToolRegistry> {
        Arc::new(
            ToolRegistry::new()
                .register(ToolEntry::new("shell", "POSIX shell").with_command("sh"))
                .register(ToolEntry::new("ghost", "Not installed").with_command(MISSING)),
        )
    }

    fn pm(program: &str) -> PackageManager {
        PackageManager {
            program: program.to_string(),
            refresh_args: vec![],
            install_args: vec![],
        }
    }

    #[tokio::test]
    async fn test_present_tool_is_available() {
        let guard = SystemToolGuard::new(registry()).with_package_manager(pm(MISSING));
        assert!(guard.ensure_available("shell").await);
    }

    #[tokio::test]
    async fn test_unknown_key_is_unavailable() {
        let guard = SystemToolGuard::new(registry());
        assert!(!guard.ensure_available("radare2").await);
    }

    #[tokio::test]
    async fn test_missing_tool_without_auto_install() {
        let guard = SystemToolGuard::new(registry()).with_auto_install(false);
        assert!(!guard.ensure_available("ghost").await);
    }

    #[tokio::test]
    async fn test_missing_package_manager() {
        let guard = SystemToolGuard::new(registry()).with_package_manager(pm(MISSING));
        assert!(!guard.ensure_available("ghost").await);
    }

    #[tokio::test]
    async fn test_refresh_failure_aborts_install() {
        // `false` exits non-zero for the refresh step.
        let guard = SystemToolGuard::new(registry()).with_package_manager(pm("false"));
        assert!(!guard.ensure_available("ghost").await);
    }

    #[tokio::test]
    async fn test_reported_install_success_is_rechecked() {
        // `true` "succeeds" at both steps but installs nothing.
        let guard = SystemToolGuard::new(registry()).with_package_manager(pm("true"));
        assert!(!guard.ensure_available("ghost").await);
    }

    #[test]
    fn test_default_package_manager_is_apt() {
        let pm = PackageManager::default();
        assert_eq!(pm.program, "apt-get");
        assert_eq!(pm.refresh_args, vec!["update"]);
        assert_eq!(pm.install_args, vec!["install", "-y"]);
    }
}
