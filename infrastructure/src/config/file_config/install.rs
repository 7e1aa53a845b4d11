//! Auto-install configuration from TOML (`[install]` section)
//!
//! ```toml
//! [install]
//! enabled = true
//! package_manager = "dnf"
//! refresh_args = ["makecache"]
//! install_args = ["install", "-y"]
//! ```

use crate::tools::PackageManager;
use serde::{Deserialize, Serialize};

/// Raw install configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInstallConfig {
    /// Attempt to install missing tools
    pub enabled: bool,
    /// Package manager executable
    pub package_manager: String,
    /// Arguments that refresh the package index
    pub refresh_args: Vec<String>,
    /// Arguments placed before the package name
    pub install_args: Vec<String>,
}

impl Default for FileInstallConfig {
    fn default() -> Self {
        let pm = PackageManager::default();
        Self {
            enabled: true,
            package_manager: pm.program,
            refresh_args: pm.refresh_args,
            install_args: pm.install_args,
        }
    }
}

impl FileInstallConfig {
    pub fn to_package_manager(&self) -> PackageManager {
        PackageManager {
            program: self.package_manager.clone(),
            refresh_args: self.refresh_args.clone(),
            install_args: self.install_args.clone(),
        }
    }
}
