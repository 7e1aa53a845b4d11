//! Output format value object

use serde::{Deserialize, Serialize};

/// How a [`Report`](crate::report::Report) is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks grouped by file (default)
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, OutputFormat::Text);
    }
}
