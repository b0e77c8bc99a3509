//! HTTP metadata fetcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use linkstart_config::MetadataConfig;
use linkstart_protocols::{MetadataError, MetadataFetcher, PageMetadata};

use crate::title::extract_title;

/// Fetches a page and reads its `<title>`, falling back to the URL's host.
pub struct HttpMetadataFetcher {
    client: Client,
}

impl HttpMetadataFetcher {
    /// Create a fetcher with the configured timeout and user agent.
    pub fn new(config: &MetadataConfig) -> Result<Self, MetadataError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| MetadataError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Download the page body. Any failure yields `None`.
    async fn download(&self, url: url::Url) -> Option<String> {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("fetchMetadata failed for {}: {}", url, e);
                return None;
            }
        };

        debug!("Fetched {} with status {}", url, response.status());

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("fetchMetadata could not read body of {}: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, url: &str) -> Result<PageMetadata, MetadataError> {
        let parsed = url::Url::parse(url).map_err(|_| MetadataError::InvalidUrl(url.to_string()))?;
        let host = parsed.host_str().unwrap_or_default().to_string();

        let title = self
            .download(parsed)
            .await
            .and_then(|body| extract_title(&body))
            .unwrap_or(host);

        Ok(PageMetadata {
            url: url.to_string(),
            title,
        })
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
