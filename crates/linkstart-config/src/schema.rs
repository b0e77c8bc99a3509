//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use linkstart_protocols::DEFAULT_FAVICON_TEMPLATE;

use crate::loader::ConfigLoader;

fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub placement: PlacementConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

/// Base directory for LinkStart state (`~/.linkstart`).
pub fn linkstart_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".linkstart"))
        .unwrap_or_else(|| PathBuf::from(".linkstart"))
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    linkstart_dir().join("config.toml")
}

/// Entry store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl StoreConfig {
    /// Store path with `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(ConfigLoader::expand_path(&self.path))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "~/.linkstart/entries.json".to_string()
}

/// Browser connection configuration (DevTools endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:9222".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

/// What to do with a stored entry whose URL cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntryPolicy {
    /// Abort the whole invocation before touching any window.
    #[default]
    Fail,
    /// Drop the entry and log a warning.
    Skip,
}

/// Window placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Upper bound for the second window's width.
    #[serde(default = "default_max_window_width")]
    pub max_window_width: u32,

    /// Screen width assumed when it cannot be measured.
    #[serde(default = "default_screen_width")]
    pub fallback_screen_width: u32,

    /// Screen height assumed when it cannot be measured.
    #[serde(default = "default_screen_height")]
    pub fallback_screen_height: u32,

    #[serde(default)]
    pub invalid_entry_policy: InvalidEntryPolicy,

    #[serde(default = "default_favicon_template")]
    pub favicon_template: String,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_window_width: default_max_window_width(),
            fallback_screen_width: default_screen_width(),
            fallback_screen_height: default_screen_height(),
            invalid_entry_policy: InvalidEntryPolicy::default(),
            favicon_template: default_favicon_template(),
        }
    }
}

fn default_max_window_width() -> u32 {
    1280
}

fn default_screen_width() -> u32 {
    1920
}

fn default_screen_height() -> u32 {
    1080
}

fn default_favicon_template() -> String {
    DEFAULT_FAVICON_TEMPLATE.to_string()
}

/// Title lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_metadata_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_metadata_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_metadata_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("LinkStart/{}", env!("CARGO_PKG_VERSION"))
}

/// Automatic opening on browser lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleConfig {
    #[serde(default = "default_true")]
    pub open_on_startup: bool,

    #[serde(default = "default_true")]
    pub open_on_install: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            open_on_startup: true,
            open_on_install: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.path, "~/.linkstart/entries.json");
        assert_eq!(config.browser.endpoint, "http://127.0.0.1:9222");
        assert_eq!(config.placement.max_window_width, 1280);
        assert_eq!(config.placement.fallback_screen_width, 1920);
        assert_eq!(config.placement.fallback_screen_height, 1080);
        assert_eq!(config.placement.invalid_entry_policy, InvalidEntryPolicy::Fail);
        assert!(config.lifecycle.open_on_startup);
        assert!(config.lifecycle.open_on_install);
    }

    #[test]
    fn test_store_resolved_path_expands_tilde() {
        let store = StoreConfig::default();
        let path = store.resolved_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("entries.json"));
    }

    #[test]
    fn test_default_user_agent() {
        assert!(default_user_agent().starts_with("LinkStart/"));
    }

    #[test]
    fn test_invalid_entry_policy_parse() {
        let placement: PlacementConfig = toml::from_str("invalid_entry_policy = \"skip\"").unwrap();
        assert_eq!(placement.invalid_entry_policy, InvalidEntryPolicy::Skip);
    }

    #[test]
    fn test_default_config_path() {
        assert!(default_config_path().ends_with(".linkstart/config.toml"));
    }
}
