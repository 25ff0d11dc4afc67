// Archive sources: remote download or local file.

pub mod fetcher;
pub mod local;
pub mod traits;

pub use fetcher::HttpSource;
pub use local::FileSource;
pub use traits::ArchiveSource;

use crate::config::{AppConfig, SourceConfig};
use crate::model::LoadError;
use std::time::Duration;

/// Builds the archive source described by the configuration.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn ArchiveSource>, LoadError> {
    let source: Box<dyn ArchiveSource> = match &config.source {
        SourceConfig::Url(url) => Box::new(HttpSource::new(
            url.clone(),
            Duration::from_secs(config.request_timeout_seconds),
        )?),
        SourceConfig::Path(path) => Box::new(FileSource::new(path.clone())),
    };
    Ok(source)
}
