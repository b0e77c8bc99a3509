//! Editable entry list.
//!
//! An owned list that editing operations act on and that is persisted
//! through an [`EntryStore`] after each change.

use tracing::{debug, warn};
use url::Url;

use linkstart_protocols::{EntryError, EntryStore, Group, MetadataFetcher, UrlEntry, parse_url};

use crate::error::CoreError;
use crate::normalize::EntryNormalizer;

/// The list of entries as edited by the user.
#[derive(Debug, Clone)]
pub struct EntryList {
    entries: Vec<UrlEntry>,
    normalizer: EntryNormalizer,
}

impl EntryList {
    pub fn new(normalizer: EntryNormalizer) -> Self {
        Self::from_entries(Vec::new(), normalizer)
    }

    pub fn from_entries(entries: Vec<UrlEntry>, normalizer: EntryNormalizer) -> Self {
        Self { entries, normalizer }
    }

    /// Read the stored list, migrating legacy entries.
    pub async fn load(store: &dyn EntryStore, normalizer: EntryNormalizer) -> Result<Self, CoreError> {
        let raw = store.get().await?;
        let entries = normalizer.normalize(&raw)?;
        debug!("Loaded {} entries", entries.len());
        Ok(Self::from_entries(entries, normalizer))
    }

    /// Replace the stored list with this one.
    pub async fn save(&self, store: &dyn EntryStore) -> Result<(), CoreError> {
        store.set(&self.entries).await?;
        debug!("Saved {} entries", self.entries.len());
        Ok(())
    }

    pub fn entries(&self) -> &[UrlEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<UrlEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, url: &str) -> Option<&UrlEntry> {
        self.entries.iter().find(|e| e.url == url)
    }

    /// Turn typed input into an absolute URL.
    ///
    /// Input that does not parse on its own is retried with an `https://`
    /// prefix, so `example.com/docs` becomes `https://example.com/docs`.
    pub fn normalize_input_url(input: &str) -> Result<String, EntryError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(EntryError::EmptyInput);
        }

        match Url::parse(input) {
            Ok(url) => Ok(url.into()),
            Err(first) => Url::parse(&format!("https://{}", input))
                .map(String::from)
                .map_err(|_| EntryError::InvalidUrl {
                    url: input.to_string(),
                    reason: first.to_string(),
                }),
        }
    }

    /// Append a new entry for typed input.
    ///
    /// The title comes from `fetcher`, falling back to the host. New entries
    /// are never pinned.
    pub async fn add(
        &mut self,
        input: &str,
        group: Group,
        fetcher: &dyn MetadataFetcher,
    ) -> Result<&UrlEntry, CoreError> {
        let url = Self::normalize_input_url(input)?;
        if self.find(&url).is_some() {
            return Err(EntryError::Duplicate(url).into());
        }

        let (_, host) = parse_url(&url)?;
        let title = match fetcher.fetch(&url).await {
            Ok(metadata) if !metadata.title.is_empty() => metadata.title,
            Ok(_) => host.clone(),
            Err(e) => {
                warn!("No metadata for {}: {}", url, e);
                host.clone()
            }
        };

        let index = self.entries.len();
        self.entries.push(UrlEntry {
            favicon: self.normalizer.favicon_for(&host),
            url,
            title,
            group,
            pinned: false,
        });
        Ok(&self.entries[index])
    }

    pub fn remove(&mut self, url: &str) -> Result<UrlEntry, EntryError> {
        let index = self.position(url)?;
        Ok(self.entries.remove(index))
    }

    /// Move an entry to `index`, clamped to the end of the list.
    pub fn move_to(&mut self, url: &str, index: usize) -> Result<(), EntryError> {
        let from = self.position(url)?;
        let entry = self.entries.remove(from);
        let to = index.min(self.entries.len());
        self.entries.insert(to, entry);
        Ok(())
    }

    pub fn set_group(&mut self, url: &str, group: Group) -> Result<(), EntryError> {
        let index = self.position(url)?;
        self.entries[index].group = group;
        Ok(())
    }

    pub fn set_pinned(&mut self, url: &str, pinned: bool) -> Result<(), EntryError> {
        let index = self.position(url)?;
        self.entries[index].pinned = pinned;
        Ok(())
    }

    fn position(&self, url: &str) -> Result<usize, EntryError> {
        self.entries
            .iter()
            .position(|e| e.url == url)
            .ok_or_else(|| EntryError::NotFound(url.to_string()))
    }
}

#[cfg(test)]
#[path = "entry_list_tests.rs"]
mod tests;
