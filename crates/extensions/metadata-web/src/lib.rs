//! Page title lookup for LinkStart.
//!
//! Provides [`HttpMetadataFetcher`], used when a URL is added to the list.

mod fetcher;
mod title;

pub use fetcher::HttpMetadataFetcher;
pub use title::extract_title;
