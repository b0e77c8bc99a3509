//! Browser window and tab types.

use serde::{Deserialize, Serialize};

/// Browser window identifier.
pub type WindowId = i64;

/// Browser tab identifier.
pub type TabId = String;

/// Window state as understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

/// A browser tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub window_id: WindowId,
    pub index: usize,
    pub url: String,
    pub active: bool,
    pub pinned: bool,
}

impl TabInfo {
    /// Whether scripts may be injected into this tab (plain web page).
    pub fn is_web_page(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }
}

/// A browser window with its geometry. Geometry may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: WindowId,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub state: WindowState,
    #[serde(default)]
    pub tabs: Vec<TabInfo>,
}

impl WindowInfo {
    /// The active tab, falling back to the first tab.
    pub fn active_or_first_tab(&self) -> Option<&TabInfo> {
        self.tabs.iter().find(|t| t.active).or_else(|| self.tabs.first())
    }
}

/// Tab query predicate. `None` fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabQuery {
    pub window_id: Option<WindowId>,
    pub active: Option<bool>,
}

impl TabQuery {
    /// The active tab of a window.
    pub fn active_in(window_id: WindowId) -> Self {
        Self {
            window_id: Some(window_id),
            active: Some(true),
        }
    }

    pub fn matches(&self, tab: &TabInfo) -> bool {
        self.window_id.is_none_or(|id| id == tab.window_id)
            && self.active.is_none_or(|active| active == tab.active)
    }
}

/// Options for creating a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWindowOptions {
    /// Initial tabs, in order.
    pub urls: Vec<String>,
    pub focused: bool,
    pub left: Option<i32>,
    pub top: Option<i32>,
}

impl CreateWindowOptions {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            focused: true,
            left: None,
            top: None,
        }
    }

    /// Request a position for the new window.
    pub fn at(mut self, left: i32, top: i32) -> Self {
        self.left = Some(left);
        self.top = Some(top);
        self
    }

    pub fn has_position(&self) -> bool {
        self.left.is_some() || self.top.is_some()
    }
}

/// Options for updating a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWindowOptions {
    pub state: Option<WindowState>,
}

impl UpdateWindowOptions {
    pub fn maximize() -> Self {
        Self {
            state: Some(WindowState::Maximized),
        }
    }
}

/// Options for creating a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTabOptions {
    pub url: String,
    pub window_id: WindowId,
    pub pinned: bool,
}

/// Options for updating a tab. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTabOptions {
    pub url: Option<String>,
    pub pinned: Option<bool>,
}

impl UpdateTabOptions {
    pub fn pin() -> Self {
        Self {
            url: None,
            pinned: Some(true),
        }
    }
}

/// Result of the in-page screen measurement routine.
///
/// Fields are optional since the page may report nothing usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenMetrics {
    pub avail_width: Option<u32>,
    pub avail_height: Option<u32>,
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
