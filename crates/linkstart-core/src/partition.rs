//! Group partitioning.

use linkstart_protocols::{Group, UrlEntry};

/// Entries split by group, each list in original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Group 1.
    pub current: Vec<UrlEntry>,
    /// Group 2.
    pub side: Vec<UrlEntry>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.side.is_empty()
    }

    pub fn len(&self) -> usize {
        self.current.len() + self.side.len()
    }
}

/// Split entries by group.
pub fn partition(entries: impl IntoIterator<Item = UrlEntry>) -> Partition {
    let (current, side) = entries
        .into_iter()
        .partition(|entry| entry.group == Group::Current);
    Partition { current, side }
}
