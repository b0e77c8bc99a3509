//! In-memory entry store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use linkstart_protocols::{EntryStore, RawEntry, StoreError, UrlEntry};

/// In-memory entry store.
pub struct MemoryEntryStore {
    entries: RwLock<Vec<RawEntry>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// A store pre-filled with raw entries, legacy shapes allowed.
    pub fn with_entries(entries: Vec<RawEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `get` calls so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn get(&self) -> Result<Vec<RawEntry>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.read().await.clone())
    }

    async fn set(&self, entries: &[UrlEntry]) -> Result<(), StoreError> {
        let raw = entries.iter().cloned().map(RawEntry::from).collect();
        *self.entries.write().await = raw;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
