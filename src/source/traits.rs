use crate::model::LoadError;

/// Anything that can hand back the raw bytes of the data archive.
#[async_trait::async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Stable identifier of the archive, used as the cache key.
    fn id(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}
