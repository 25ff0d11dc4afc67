use crate::model::LoadError;
use crate::source::ArchiveSource;

use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Downloads the archive over HTTP.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(concat!("shop-pulse/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl ArchiveSource for HttpSource {
    fn id(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        info!("Downloading archive from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        info!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}
