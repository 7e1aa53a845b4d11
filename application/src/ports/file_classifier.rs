//! File classifier port

use async_trait::async_trait;
use launcher_domain::FileClassification;
use std::path::Path;

/// Port for deriving advisory type information for a file.
///
/// Best effort: implementations never fail, they leave
/// `description` empty instead.
#[async_trait]
pub trait FileClassifierPort: Send + Sync {
    async fn classify(&self, path: &Path) -> FileClassification;
}
