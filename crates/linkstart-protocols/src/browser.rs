//! Browser platform protocol.
//!
//! The window and tab primitives the placement logic is written against. Every
//! call is a single-result future; callers sequence them explicitly.

use async_trait::async_trait;

use crate::error::PlatformError;
use crate::types::{
    CreateTabOptions, CreateWindowOptions, ScreenMetrics, TabId, TabInfo, TabQuery,
    UpdateTabOptions, UpdateWindowOptions, WindowId, WindowInfo,
};

#[async_trait]
pub trait BrowserPlatform: Send + Sync {
    /// The window the platform last considered focused, with its tabs populated.
    ///
    /// `None` when no window exists or none is focusable.
    async fn last_focused_window(&self) -> Result<Option<WindowInfo>, PlatformError>;

    /// Tabs matching the query, in tab-strip order.
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabInfo>, PlatformError>;

    /// Create a window whose initial tabs are `options.urls`, in order.
    async fn create_window(&self, options: CreateWindowOptions) -> Result<WindowInfo, PlatformError>;

    async fn update_window(
        &self,
        id: WindowId,
        options: UpdateWindowOptions,
    ) -> Result<WindowInfo, PlatformError>;

    /// Append a tab to a window.
    async fn create_tab(&self, options: CreateTabOptions) -> Result<TabInfo, PlatformError>;

    async fn update_tab(&self, id: &TabId, options: UpdateTabOptions) -> Result<TabInfo, PlatformError>;

    /// Run the screen measurement routine inside a tab and return what it reported.
    async fn measure_screen(&self, tab: &TabId) -> Result<ScreenMetrics, PlatformError>;
}
