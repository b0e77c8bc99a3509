//! Request dispatch for the invocation protocol.

use std::sync::Arc;

use tracing::{debug, warn};

use linkstart_protocols::{MetadataFetcher, PageMetadata, Request, Response};

use crate::orchestrator::Orchestrator;

/// Dispatches [`Request`] messages to the orchestrator and the metadata fetcher.
pub struct MessageHandler {
    orchestrator: Arc<Orchestrator>,
    fetcher: Arc<dyn MetadataFetcher>,
}

impl MessageHandler {
    pub fn new(orchestrator: Arc<Orchestrator>, fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self {
            orchestrator,
            fetcher,
        }
    }

    pub async fn handle(&self, request: Request) -> Response {
        debug!("Handling request: {:?}", request);
        match request {
            Request::OpenTabs => Response::Placement(self.orchestrator.invoke().await),
            Request::FetchMetadata { url } => Response::Metadata(self.fetch_metadata(url).await),
        }
    }

    /// Handle a JSON-encoded request and encode the response.
    pub async fn handle_json(&self, message: &str) -> Result<String, serde_json::Error> {
        let request: Request = serde_json::from_str(message)?;
        let response = self.handle(request).await;
        serde_json::to_string(&response)
    }

    /// Title lookup never fails: an unusable URL is echoed back as its own title.
    async fn fetch_metadata(&self, url: String) -> PageMetadata {
        match self.fetcher.fetch(&url).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Metadata lookup failed for {}: {}", url, e);
                PageMetadata {
                    title: url.clone(),
                    url,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
