//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod install;
mod output;
mod tools;

pub use behavior::FileBehaviorConfig;
pub use install::FileInstallConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use tools::FileToolConfig;

use crate::tools::default_tool_registry;
use launcher_domain::ToolRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("behavior.jobs cannot be 0")]
    ZeroJobs,

    #[error("tools.{0}.command cannot be empty")]
    EmptyToolCommand(String),

    #[error("install.package_manager cannot be empty")]
    EmptyPackageManager,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Execution settings
    pub behavior: FileBehaviorConfig,
    /// Missing-tool install settings
    pub install: FileInstallConfig,
    /// Additional or overriding tool definitions, by key
    pub tools: BTreeMap<String, FileToolConfig>,
}

impl FileConfig {
    /// Validate the configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.behavior.jobs == 0 {
            issues.push(ConfigValidationError::ZeroJobs);
        }

        if self.install.enabled && self.install.package_manager.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyPackageManager);
        }

        issues.extend(
            self.tools
                .iter()
                .filter(|(_, tool)| tool.command.as_deref().is_some_and(|c| c.trim().is_empty()))
                .map(|(key, _)| ConfigValidationError::EmptyToolCommand(key.clone())),
        );

        issues
    }

    /// Built-in registry with the configured tools merged over it.
    pub fn tool_registry(&self) -> ToolRegistry {
        self.tools
            .iter()
            .fold(default_tool_registry(), |registry, (key, tool)| {
                registry.register(tool.to_entry(key))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[behavior]
jobs = 3

[install]
enabled = false

[tools.yara]
description = "Pattern matching."
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.behavior.jobs, 3);
        assert!(!config.install.enabled);
        assert!(config.tools.contains_key("yara"));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert_eq!(config.behavior.jobs, 1);
        assert!(config.install.enabled);
        assert!(config.tools.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[behavior]
jobs = 0

[tools.a]
command = ""

[tools.b]
command = "b"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::ZeroJobs,
                ConfigValidationError::EmptyToolCommand("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_package_manager_only_matters_when_enabled() {
        let mut config = FileConfig::default();
        config.install.package_manager = String::new();
        assert_eq!(
            config.validate(),
            vec![ConfigValidationError::EmptyPackageManager]
        );

        config.install.enabled = false;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_tool_registry_merges_over_builtins() {
        let toml_str = r#"
[tools.yara]
description = "Pattern matching."

[tools.xxd]
command = "hexdump"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let registry = config.tool_registry();
        let builtin = default_tool_registry();

        assert_eq!(registry.len(), builtin.len() + 1);
        assert_eq!(registry.get("xxd").unwrap().command, "hexdump");
        assert!(registry.contains("yara"));
        assert!(registry.contains("exiftool"));
    }
}
