//! Advisory file type information

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lightweight type signal attached to every result. Never affects control
/// flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileClassification {
    /// Lowercase extension without the leading dot
    pub extension: Option<String>,
    /// One-line description from an external type sniffer
    pub description: Option<String>,
}

impl FileClassification {
    /// Classification carrying only the extension derived from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            extension: Self::extension_of(path),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Everything after the last `.` of the final path segment, lowercased.
    ///
    /// Returns `None` when there is no dot, when nothing follows it, or when
    /// the only dot is the leading one of a hidden file (`.bashrc`).
    pub fn extension_of(path: impl AsRef<Path>) -> Option<String> {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercased() {
        assert_eq!(
            FileClassification::extension_of("/cases/IMG_0001.JPG"),
            Some("jpg".to_string())
        );
    }

    #[test]
    fn test_extension_uses_last_dot_only() {
        assert_eq!(
            FileClassification::extension_of("dump.tar.GZ"),
            Some("gz".to_string())
        );
    }

    #[test]
    fn test_extension_absent() {
        assert_eq!(FileClassification::extension_of("/bin/firmware"), None);
        assert_eq!(FileClassification::extension_of("trailing."), None);
        assert_eq!(FileClassification::extension_of("/home/u/.bashrc"), None);
    }

    #[test]
    fn test_extension_ignores_dots_in_directories() {
        assert_eq!(FileClassification::extension_of("/case.01/blob"), None);
    }

    #[test]
    fn test_from_path_has_no_description() {
        let c = FileClassification::from_path("report.pdf");
        assert_eq!(c.extension.as_deref(), Some("pdf"));
        assert!(c.description.is_none());

        let c = c.with_description(Some("PDF document, version 1.7".to_string()));
        assert_eq!(c.description.as_deref(), Some("PDF document, version 1.7"));
    }
}
