//! Tool invocation request

use crate::safety::SafeArgs;
use std::path::PathBuf;

/// One (tool, file, arguments) triple about to be executed.
///
/// `args` is a [`SafeArgs`], so a request cannot exist without the argument
/// filter having run. The file path is appended last by the runner and is
/// not itself filtered; it only ever comes from the path resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocationRequest {
    pub tool_key: String,
    pub file_path: PathBuf,
    pub args: SafeArgs,
}

impl ToolInvocationRequest {
    pub fn new(tool_key: impl Into<String>, file_path: impl Into<PathBuf>, args: SafeArgs) -> Self {
        Self {
            tool_key: tool_key.into(),
            file_path: file_path.into(),
            args,
        }
    }
}
