//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Metadata for one external tool the launcher can invoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Registry key (e.g., "xxd")
    pub key: String,
    /// Executable name looked up on the search path
    pub command: String,
    /// Package that provides the executable
    pub package: String,
    /// Human-readable description
    pub description: String,
    /// Arguments that make the tool print its help text
    pub help_args: Vec<String>,
    /// Example invocations shown in the tool catalog
    pub examples: Vec<String>,
}

impl ToolEntry {
    /// Create an entry whose key, command and package share one name.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            command: key.clone(),
            package: key.clone(),
            key,
            description: description.into(),
            help_args: vec!["--help".to_string()],
            examples: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_help_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.help_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_command_and_package_to_key() {
        let entry = ToolEntry::new("xxd", "Hex dump");
        assert_eq!(entry.command, "xxd");
        assert_eq!(entry.package, "xxd");
        assert_eq!(entry.help_args, vec!["--help"]);
        assert!(entry.examples.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let entry = ToolEntry::new("strings", "Printable strings")
            .with_package("binutils")
            .with_help_args(["-h"])
            .with_example("forensic-launcher -t strings malware.bin -- -n 8");

        assert_eq!(entry.command, "strings");
        assert_eq!(entry.package, "binutils");
        assert_eq!(entry.help_args, vec!["-h"]);
        assert_eq!(entry.examples.len(), 1);
    }
}
