//! CDP HTTP endpoint discovery.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::CdpError;
use crate::protocol::{BrowserVersion, PageInfo};

/// The HTTP side of a Chrome remote-debugging endpoint.
#[derive(Debug, Clone)]
pub struct CdpEndpoint {
    base: String,
    client: Client,
}

impl CdpEndpoint {
    /// `endpoint` is the debugging address, e.g. `http://127.0.0.1:9222`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, CdpError> {
        Url::parse(endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Browser version info, including the browser WebSocket URL.
    pub async fn version(&self) -> Result<BrowserVersion, CdpError> {
        let url = format!("{}/json/version", self.base);
        debug!("Fetching browser version from {}", url);

        self.client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CdpError::ChromeNotAvailable(format!("{}: {}", self.base, e)))?
            .json()
            .await
            .map_err(|e| CdpError::ChromeNotAvailable(format!("{}: {}", self.base, e)))
    }

    /// Page targets, most recently active first.
    pub async fn list_pages(&self) -> Result<Vec<PageInfo>, CdpError> {
        let url = format!("{}/json/list", self.base);
        let targets: Vec<PageInfo> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(targets.into_iter().filter(PageInfo::is_page).collect())
    }
}
