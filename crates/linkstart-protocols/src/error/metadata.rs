//! Metadata lookup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}
