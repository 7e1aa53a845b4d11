//! Target file sets
//!
//! A run operates on a [`ResolvedPathSet`]: absolute paths of regular files
//! that existed at resolution time, plus the inputs that did not resolve.
//! The filesystem walk itself lives in the infrastructure layer; this module
//! only holds the value types and the order-preserving deduplication.

pub mod entities;

pub use entities::{PathSources, ResolvedPathSet, ResolvedPathSetBuilder};
