//! Argument safety filter
//!
//! User-supplied tool arguments pass through [`check_arguments`] before any
//! subprocess is built. The filter is a fixed substring denylist, not a
//! sandbox: subprocesses are always spawned without a shell, and the
//! denylist only catches naive metacharacter injection on top of that.

pub mod argument_filter;

pub use argument_filter::{ArgumentRejected, DENYLIST, SafeArgs, check_arguments};
