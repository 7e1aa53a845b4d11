//! Application-level configuration.
//!
//! Controls how the run use case schedules per-file work.

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Maximum number of files processed at once. `1` means strictly
    /// sequential; results are reported in resolution order either way.
    pub jobs: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with the given concurrency. Zero is clamped
    /// to one.
    pub fn with_jobs(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }
}
