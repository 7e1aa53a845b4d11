//! Path resolver port
//!
//! Turns heterogeneous path inputs into a [`ResolvedPathSet`].

use launcher_domain::{PathSources, ResolvedPathSet};

/// Port for resolving user-supplied path inputs.
///
/// Implementations only read the filesystem; they never write. Resolving
/// the same sources twice with no filesystem change in between must yield
/// identical sets in identical order.
pub trait PathResolverPort: Send + Sync {
    fn resolve(&self, sources: &PathSources) -> ResolvedPathSet;
}
