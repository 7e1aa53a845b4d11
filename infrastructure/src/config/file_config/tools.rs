//! Tool definitions from TOML (`[tools.<key>]` tables)
//!
//! Entries extend the built-in registry or replace a built-in tool with the
//! same key:
//!
//! ```toml
//! [tools.yara]
//! command = "yara"
//! description = "Pattern matching for malware samples."
//! examples = ["forensic-launcher -t yara sample.bin -- rules.yar"]
//!
//! [tools.strings]
//! command = "llvm-strings"
//! package = "llvm"
//! ```

use launcher_domain::ToolEntry;
use serde::{Deserialize, Serialize};

/// Raw tool definition from TOML
///
/// Every field except the key is optional; missing fields fall back to
/// the same defaults as [`ToolEntry::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    /// Executable name; defaults to the key
    pub command: Option<String>,
    /// Package providing the executable; defaults to the command
    pub package: Option<String>,
    pub description: String,
    /// Arguments printing the tool's help
    pub help_args: Option<Vec<String>>,
    pub examples: Vec<String>,
}

impl FileToolConfig {
    pub fn to_entry(&self, key: &str) -> ToolEntry {
        let mut entry = ToolEntry::new(key, self.description.clone());
        if let Some(command) = &self.command {
            entry = entry.with_command(command.clone());
        }
        if let Some(package) = self.package.as_ref().or(self.command.as_ref()) {
            entry = entry.with_package(package.clone());
        }
        if let Some(help_args) = &self.help_args {
            entry = entry.with_help_args(help_args.clone());
        }
        self.examples
            .iter()
            .fold(entry, |entry, example| entry.with_example(example.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_entry_uses_key_defaults() {
        let entry = FileToolConfig {
            description: "Pattern matching.".to_string(),
            ..Default::default()
        }
        .to_entry("yara");

        assert_eq!(entry.key, "yara");
        assert_eq!(entry.command, "yara");
        assert_eq!(entry.package, "yara");
        assert_eq!(entry.help_args, vec!["--help"]);
        assert!(entry.examples.is_empty());
    }

    #[test]
    fn test_package_follows_command() {
        let entry = FileToolConfig {
            command: Some("hexdump".to_string()),
            ..Default::default()
        }
        .to_entry("hex");

        assert_eq!(entry.command, "hexdump");
        assert_eq!(entry.package, "hexdump");
    }

    #[test]
    fn test_full_entry() {
        let toml_str = r#"
[tools.strings]
command = "llvm-strings"
package = "llvm"
description = "LLVM strings."
help_args = ["-h"]
examples = ["one", "two"]
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let entry = config.tools["strings"].to_entry("strings");

        assert_eq!(entry.command, "llvm-strings");
        assert_eq!(entry.package, "llvm");
        assert_eq!(entry.description, "LLVM strings.");
        assert_eq!(entry.help_args, vec!["-h"]);
        assert_eq!(entry.examples, vec!["one", "two"]);
    }
}
