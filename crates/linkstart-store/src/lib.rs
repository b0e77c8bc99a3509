//! # LinkStart Store
//!
//! [`EntryStore`](linkstart_protocols::EntryStore) implementations:
//!
//! - [`MemoryEntryStore`] - in-process list, used in tests and dry runs
//! - [`FileEntryStore`] - JSON file, replaced atomically on every write

mod file;
mod memory;

pub use file::FileEntryStore;
pub use memory::MemoryEntryStore;
