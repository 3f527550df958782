use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::ByteSource;
use crate::error::{BicDirError, Result};

/// HTTP source that downloads the archive in a single GET request
pub struct HttpByteSource {
    client: Client,
    url: String,
}

impl HttpByteSource {
    /// Create a new HTTP source for the given URL
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| BicDirError::transport(&url, e))?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl ByteSource for HttpByteSource {
    async fn collect(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| BicDirError::transport(&self.url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| BicDirError::transport(&self.url, e))?;

        debug!(url = %self.url, bytes = body.len(), "archive downloaded");

        Ok(body.to_vec())
    }

    fn locator(&self) -> &str {
        &self.url
    }
}
