//! Configuration file loading for forensic-launcher
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FORENSIC_LAUNCHER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./launcher.toml` or `./.launcher.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/forensic-launcher/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileConfig, FileInstallConfig, FileOutputConfig,
    FileOutputFormat, FileToolConfig,
};
pub use loader::ConfigLoader;
