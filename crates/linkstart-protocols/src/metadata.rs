//! Metadata lookup protocol.

use async_trait::async_trait;

use crate::error::MetadataError;
use crate::types::PageMetadata;

/// Looks up display metadata for a URL.
///
/// Implementations absorb network and parse failures and fall back to the URL's
/// host as title. Only a URL that cannot be parsed at all is an error.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageMetadata, MetadataError>;
}
