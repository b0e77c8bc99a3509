//! # LinkStart Browser CDP
//!
//! [`BrowserPlatform`](linkstart_protocols::BrowserPlatform) over the Chrome
//! DevTools Protocol.
//!
//! Start Chrome with remote debugging enabled:
//!
//! ```bash
//! chrome --remote-debugging-port=9222
//! ```
//!
//! then connect:
//!
//! ```rust,ignore
//! let browser = CdpBrowser::connect(&config.browser).await?;
//! let window = browser.last_focused_window().await?;
//! ```
//!
//! CDP has no notion of tab pinning or of an "active tab". The first page
//! target listed for a window stands in for its active tab, and pin requests
//! are logged and ignored.

mod browser;
mod client;
mod discovery;
mod error;
mod protocol;

pub use browser::CdpBrowser;
pub use client::CdpClient;
pub use discovery::CdpEndpoint;
pub use error::CdpError;
pub use protocol::*;
