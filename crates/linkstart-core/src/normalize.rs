//! Entry normalization.
//!
//! Turns the stored list (legacy bare strings and partial records mixed) into
//! fully populated [`UrlEntry`] values, filling every default.

use tracing::warn;

use linkstart_config::{InvalidEntryPolicy, PlacementConfig};
use linkstart_protocols::{EntryError, RawEntry, RawRecord, UrlEntry, favicon_url, parse_url};

/// Fills entry defaults and applies the invalid-entry policy.
#[derive(Debug, Clone)]
pub struct EntryNormalizer {
    favicon_template: String,
    policy: InvalidEntryPolicy,
}

impl EntryNormalizer {
    pub fn new(favicon_template: impl Into<String>, policy: InvalidEntryPolicy) -> Self {
        Self {
            favicon_template: favicon_template.into(),
            policy,
        }
    }

    pub fn from_config(config: &PlacementConfig) -> Self {
        Self::new(config.favicon_template.clone(), config.invalid_entry_policy)
    }

    /// Normalize a whole list, preserving order.
    ///
    /// With [`InvalidEntryPolicy::Fail`] the first unparseable URL aborts the
    /// list; with [`InvalidEntryPolicy::Skip`] it is dropped and logged.
    pub fn normalize(&self, raw: &[RawEntry]) -> Result<Vec<UrlEntry>, EntryError> {
        let mut entries = Vec::with_capacity(raw.len());
        for (index, item) in raw.iter().enumerate() {
            match self.normalize_one(item) {
                Ok(entry) => entries.push(entry),
                Err(e) if self.policy == InvalidEntryPolicy::Skip => {
                    warn!("Skipping stored entry #{}: {}", index, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(entries)
    }

    /// Favicon URL for `host` according to the configured template.
    pub fn favicon_for(&self, host: &str) -> String {
        favicon_url(&self.favicon_template, host)
    }

    pub fn normalize_one(&self, raw: &RawEntry) -> Result<UrlEntry, EntryError> {
        match raw {
            RawEntry::Legacy(url) => {
                let (_, host) = parse_url(url)?;
                Ok(UrlEntry {
                    url: url.clone(),
                    title: host.clone(),
                    favicon: self.favicon_for(&host),
                    group: Default::default(),
                    pinned: false,
                })
            }
            RawEntry::Record(record) => self.normalize_record(record),
        }
    }

    fn normalize_record(&self, record: &RawRecord) -> Result<UrlEntry, EntryError> {
        let (_, host) = parse_url(&record.url)?;

        let title = non_empty(record.title.as_deref()).unwrap_or(host.as_str()).to_string();
        let favicon = match non_empty(record.favicon.as_deref()) {
            Some(favicon) => favicon.to_string(),
            None => self.favicon_for(&host),
        };

        Ok(UrlEntry {
            url: record.url.clone(),
            title,
            favicon,
            group: record.group(),
            pinned: record.is_pinned(),
        })
    }
}

impl Default for EntryNormalizer {
    fn default() -> Self {
        Self::from_config(&PlacementConfig::default())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
