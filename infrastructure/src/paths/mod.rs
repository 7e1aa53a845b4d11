//! Filesystem path resolution
//!
//! Provides [`LocalPathResolver`], the adapter behind
//! [`PathResolverPort`](launcher_application::PathResolverPort).

mod normalize;
mod resolver;

pub use normalize::{expand_home, lexical_clean};
pub use resolver::LocalPathResolver;
