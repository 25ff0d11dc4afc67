use crate::model::LoadError;
use crate::source::ArchiveSource;

use tracing::info;

/// Reads the archive from disk, for offline runs.
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ArchiveSource for FileSource {
    fn id(&self) -> &str {
        &self.path
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        info!("Reading archive from {}", self.path);
        Ok(tokio::fs::read(&self.path).await?)
    }
}
