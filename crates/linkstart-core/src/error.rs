//! Core error types.

use thiserror::Error;

use linkstart_protocols::{EntryError, MetadataError, StoreError};

/// Errors raised before or around placement (placement failures themselves are
/// reported per group in [`PlacementReport`](crate::PlacementReport)).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("Entry store error: {0}")]
    Store(#[from] StoreError),

    #[error("Metadata lookup failed: {0}")]
    Metadata(#[from] MetadataError),
}
