//! # LinkStart Protocols
//!
//! Data model and interface definitions (traits) shared by the LinkStart crates.
//! Contains no placement logic.
//!
//! ## Core Traits
//!
//! - [`BrowserPlatform`] - Window and tab primitives of a browser
//! - [`EntryStore`] - Persisted, ordered list of URL entries
//! - [`MetadataFetcher`] - Title lookup for a URL

pub mod browser;
pub mod error;
pub mod metadata;
pub mod store;
pub mod types;

pub use browser::BrowserPlatform;
pub use error::{EntryError, MetadataError, PlatformError, StoreError};
pub use metadata::MetadataFetcher;
pub use store::EntryStore;
pub use types::*;
