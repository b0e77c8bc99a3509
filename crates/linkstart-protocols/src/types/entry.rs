//! URL entry types: the stored shape and the normalized shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::EntryError;

/// Default favicon lookup, `{host}` is replaced by the entry's host.
pub const DEFAULT_FAVICON_TEMPLATE: &str = "https://www.google.com/s2/favicons?sz=64&domain={host}";

/// Display group selecting the placement strategy of an entry.
///
/// Serialized as the integer `1` or `2`. Any other number maps to [`Group::Current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Group {
    /// Group 1: opened in the focused window.
    #[default]
    Current,
    /// Group 2: opened in a new window beside the focused one.
    Side,
}

impl Group {
    /// The group number as shown to users.
    pub fn number(self) -> u8 {
        match self {
            Group::Current => 1,
            Group::Side => 2,
        }
    }

    /// Interpret an arbitrary stored JSON value as a group.
    pub fn from_value(value: &Value) -> Self {
        match value.as_f64() {
            Some(n) if n == 2.0 => Group::Side,
            _ => Group::Current,
        }
    }
}

impl From<u8> for Group {
    fn from(n: u8) -> Self {
        if n == 2 { Group::Side } else { Group::Current }
    }
}

impl From<Group> for u8 {
    fn from(group: Group) -> Self {
        group.number()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.number())
    }
}

/// A fully populated URL entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub url: String,
    pub title: String,
    pub favicon: String,
    pub group: Group,
    pub pinned: bool,
}

/// An entry as found in the store, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// Legacy shape: a bare URL string.
    Legacy(String),
    /// Object shape with possibly missing fields.
    Record(RawRecord),
}

impl RawEntry {
    /// The URL text of the entry, whatever its shape.
    pub fn url(&self) -> &str {
        match self {
            RawEntry::Legacy(url) => url,
            RawEntry::Record(record) => &record.url,
        }
    }
}

impl From<UrlEntry> for RawEntry {
    fn from(entry: UrlEntry) -> Self {
        RawEntry::Record(RawRecord {
            url: entry.url,
            title: Some(entry.title),
            favicon: Some(entry.favicon),
            group: Some(Value::from(entry.group.number())),
            pinned: Some(Value::Bool(entry.pinned)),
        })
    }
}

impl From<&str> for RawEntry {
    fn from(url: &str) -> Self {
        RawEntry::Legacy(url.to_string())
    }
}

/// Object-shaped stored entry. Group and pin flag are kept as loose JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Value>,
}

impl RawRecord {
    pub fn group(&self) -> Group {
        self.group.as_ref().map(Group::from_value).unwrap_or_default()
    }

    /// Truthiness of the stored pin flag.
    pub fn is_pinned(&self) -> bool {
        match &self.pinned {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// Parse an absolute URL and return it with its host.
///
/// The host is empty for URLs that have none (`about:blank`, `data:` ...).
pub fn parse_url(input: &str) -> Result<(Url, String), EntryError> {
    let url = Url::parse(input).map_err(|e| EntryError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;
    let host = url.host_str().unwrap_or_default().to_string();
    Ok((url, host))
}

/// Expand a favicon template for a host.
pub fn favicon_url(template: &str, host: &str) -> String {
    template.replace("{host}", host)
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
