//! Entry store protocol.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{RawEntry, UrlEntry};

/// Persisted, ordered list of URL entries.
///
/// Writes replace the whole list.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Read the stored list as-is, legacy shapes included. An empty store yields an empty list.
    async fn get(&self) -> Result<Vec<RawEntry>, StoreError>;

    /// Replace the stored list.
    async fn set(&self, entries: &[UrlEntry]) -> Result<(), StoreError>;
}
