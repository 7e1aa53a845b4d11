//! Output configuration from TOML (`[output]` section)

use launcher_domain::OutputFormat;
use serde::{Deserialize, Serialize};

// Re-export OutputFormat from domain for convenience
pub use launcher_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report format; `None` leaves the choice to the command line
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
