//! Denylist-based argument filter.

use serde::Serialize;
use thiserror::Error;

/// Substrings that reject an argument outright (case-sensitive, checked in
/// this order).
pub const DENYLIST: [&str; 7] = [";", "&&", "|", "`", "$(", "${", "sudo"];

/// An argument matched the denylist. The whole argument set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("argument not allowed: {argument}")]
pub struct ArgumentRejected {
    /// The exact argument string that matched
    pub argument: String,
    /// The denylist entry it matched
    pub pattern: &'static str,
}

/// Tool arguments that have passed [`check_arguments`].
///
/// The only way to obtain one is through the filter, so anything holding a
/// `SafeArgs` is known to be free of denylisted substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeArgs(Vec<String>);

impl SafeArgs {
    /// Empty argument list (trivially safe).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Scan every argument for every denylisted substring.
///
/// Arguments are scanned in order, and patterns in [`DENYLIST`] order per
/// argument; the first hit rejects the set. On success the arguments are
/// returned unchanged.
pub fn check_arguments<S: AsRef<str>>(args: &[S]) -> Result<SafeArgs, ArgumentRejected> {
    for arg in args {
        let arg = arg.as_ref();
        if let Some(pattern) = DENYLIST.iter().copied().find(|p| arg.contains(*p)) {
            return Err(ArgumentRejected {
                argument: arg.to_string(),
                pattern,
            });
        }
    }
    Ok(SafeArgs(
        args.iter().map(|a| a.as_ref().to_string()).collect(),
    ))
}
