//! JSON file entry store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use linkstart_protocols::{EntryStore, RawEntry, StoreError, UrlEntry};

/// On-disk document. Mirrors the extension storage layout (`{"urls": [...]}`).
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    urls: Vec<RawEntry>,
}

/// Accepted on read: the document, or a bare list exported from older versions.
/// Elements stay loose JSON so one odd element cannot hide the others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredShape {
    Document {
        #[serde(default)]
        urls: Vec<Value>,
    },
    List(Vec<Value>),
}

/// Read one stored element. Anything that is neither a URL string nor an
/// entry object becomes a legacy entry holding its JSON text, which the
/// normalizer then rejects or skips like any other invalid URL.
fn raw_entry(value: Value) -> RawEntry {
    match serde_json::from_value::<RawEntry>(value.clone()) {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Unreadable stored entry {}: {}", value, e);
            RawEntry::Legacy(value.to_string())
        }
    }
}

/// File system based entry store.
///
/// Writes go to a sibling temporary file which is then renamed over the store,
/// so readers never observe a half-written list.
pub struct FileEntryStore {
    path: PathBuf,
}

impl FileEntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "entries.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl EntryStore for FileEntryStore {
    async fn get(&self) -> Result<Vec<RawEntry>, StoreError> {
        if !fs::try_exists(&self.path).await? {
            debug!("Entry store {:?} does not exist yet, treating as empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let values = match serde_json::from_str::<StoredShape>(&content) {
            Ok(StoredShape::Document { urls }) => urls,
            Ok(StoredShape::List(list)) => list,
            Err(e) => {
                return Err(StoreError::Corrupt(format!("{:?}: {}", self.path, e)));
            }
        };
        let entries: Vec<RawEntry> = values.into_iter().map(raw_entry).collect();

        debug!("Loaded {} entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    async fn set(&self, entries: &[UrlEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let doc = StoreDocument {
            urls: entries.iter().cloned().map(RawEntry::from).collect(),
        };
        let content = serde_json::to_string_pretty(&doc)?;

        let temp = self.temp_path();
        fs::write(&temp, content).await?;
        fs::rename(&temp, &self.path).await?;

        debug!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
