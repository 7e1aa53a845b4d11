//! Behavior configuration from TOML (`[behavior]` section)

use launcher_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Number of files processed concurrently
    pub jobs: usize,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            jobs: BehaviorConfig::default().jobs,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::with_jobs(self.jobs)
    }
}
