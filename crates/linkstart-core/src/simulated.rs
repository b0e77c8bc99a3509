//! In-memory browser.
//!
//! [`SimulatedBrowser`] models windows, tabs, focus and pinning closely enough
//! to run placements without a real browser: for dry runs and tests. Every
//! platform call is recorded, and individual calls can be made to fail.

use async_trait::async_trait;
use parking_lot::Mutex;

use linkstart_protocols::{
    BrowserPlatform, CreateTabOptions, CreateWindowOptions, PlatformError, ScreenMetrics, TabId,
    TabInfo, TabQuery, UpdateTabOptions, UpdateWindowOptions, WindowId, WindowInfo, WindowState,
};

const NEW_TAB_URL: &str = "chrome://newtab/";
const DEFAULT_WIDTH: i32 = 1280;
const DEFAULT_HEIGHT: i32 = 800;

/// A platform call as received by the simulated browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCall {
    LastFocusedWindow,
    QueryTabs(TabQuery),
    CreateWindow(CreateWindowOptions),
    UpdateWindow(WindowId, UpdateWindowOptions),
    CreateTab(CreateTabOptions),
    UpdateTab(TabId, UpdateTabOptions),
    MeasureScreen(TabId),
}

#[derive(Debug, Default)]
struct Faults {
    focus_query: bool,
    positioned_windows: bool,
    windows: bool,
    tabs: bool,
    measurement: bool,
}

#[derive(Debug)]
struct State {
    windows: Vec<WindowInfo>,
    focused: Option<WindowId>,
    next_window_id: WindowId,
    next_tab_id: u64,
    screen: ScreenMetrics,
    faults: Faults,
    calls: Vec<BrowserCall>,
}

impl State {
    fn window_mut(&mut self, id: WindowId) -> Result<&mut WindowInfo, PlatformError> {
        self.windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(PlatformError::WindowNotFound(id))
    }

    fn find_tab(&self, id: &str) -> Option<&TabInfo> {
        self.windows.iter().flat_map(|w| w.tabs.iter()).find(|t| t.id == id)
    }

    fn new_tab(&mut self, window_id: WindowId, url: &str) -> TabInfo {
        self.next_tab_id += 1;
        TabInfo {
            id: format!("tab-{}", self.next_tab_id),
            window_id,
            index: 0,
            url: url.to_string(),
            active: false,
            pinned: false,
        }
    }

    fn add_window(&mut self, geometry: [Option<i32>; 4], urls: &[String]) -> WindowId {
        self.next_window_id += 1;
        let id = self.next_window_id;

        let mut tabs: Vec<TabInfo> = if urls.is_empty() {
            vec![self.new_tab(id, NEW_TAB_URL)]
        } else {
            urls.iter().map(|url| self.new_tab(id, url)).collect()
        };
        if let Some(first) = tabs.first_mut() {
            first.active = true;
        }

        let [left, top, width, height] = geometry;
        let mut window = WindowInfo {
            id,
            left,
            top,
            width,
            height,
            state: WindowState::Normal,
            tabs: Vec::new(),
        };
        window.tabs.append(&mut tabs);
        settle_tabs(&mut window);

        self.windows.push(window);
        id
    }
}

/// Pinned tabs sit before unpinned ones; indices follow strip order.
fn settle_tabs(window: &mut WindowInfo) {
    window.tabs.sort_by_key(|t| !t.pinned);
    for (index, tab) in window.tabs.iter_mut().enumerate() {
        tab.index = index;
    }
}

/// In-memory [`BrowserPlatform`].
pub struct SimulatedBrowser {
    state: Mutex<State>,
}

impl SimulatedBrowser {
    /// A browser with no windows and an unknown screen size.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                windows: Vec::new(),
                focused: None,
                next_window_id: 0,
                next_tab_id: 0,
                screen: ScreenMetrics::default(),
                faults: Faults::default(),
                calls: Vec::new(),
            }),
        }
    }

    /// Open a focused window at `(left, top)` sized `width`×`height` whose
    /// first tab is active.
    pub fn with_window(self, left: i32, top: i32, width: i32, height: i32, urls: &[&str]) -> Self {
        {
            let mut state = self.state.lock();
            let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
            let id = state.add_window([Some(left), Some(top), Some(width), Some(height)], &urls);
            state.focused = Some(id);
        }
        self
    }

    /// Clear the active flag of every tab.
    pub fn without_active_tab(self) -> Self {
        for window in self.state.lock().windows.iter_mut() {
            window.tabs.iter_mut().for_each(|t| t.active = false);
        }
        self
    }

    /// Screen size reported by the measurement routine.
    pub fn with_screen(self, avail_width: u32, avail_height: u32) -> Self {
        self.state.lock().screen = ScreenMetrics {
            avail_width: Some(avail_width),
            avail_height: Some(avail_height),
        };
        self
    }

    /// Reject the focused-window query.
    pub fn fail_focus_query(self) -> Self {
        self.state.lock().faults.focus_query = true;
        self
    }

    /// Reject window creation when a position is requested.
    pub fn fail_positioned_windows(self) -> Self {
        self.state.lock().faults.positioned_windows = true;
        self
    }

    /// Reject every window creation.
    pub fn fail_window_creation(self) -> Self {
        self.state.lock().faults.windows = true;
        self
    }

    /// Reject every tab creation.
    pub fn fail_tab_creation(self) -> Self {
        self.state.lock().faults.tabs = true;
        self
    }

    /// Reject script injection.
    pub fn fail_measurement(self) -> Self {
        self.state.lock().faults.measurement = true;
        self
    }

    /// Snapshot of all windows, in creation order.
    pub fn windows(&self) -> Vec<WindowInfo> {
        self.state.lock().windows.clone()
    }

    pub fn window(&self, id: WindowId) -> Option<WindowInfo> {
        self.state.lock().windows.iter().find(|w| w.id == id).cloned()
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.state.lock().focused
    }

    /// Every platform call received so far, in order.
    pub fn calls(&self) -> Vec<BrowserCall> {
        self.state.lock().calls.clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl Default for SimulatedBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrowserPlatform for SimulatedBrowser {
    async fn last_focused_window(&self) -> Result<Option<WindowInfo>, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::LastFocusedWindow);

        if state.faults.focus_query {
            return Err(PlatformError::rejected("windows.getLastFocused", "no browser window"));
        }

        let focused = state.focused;
        Ok(focused.and_then(|id| state.windows.iter().find(|w| w.id == id).cloned()))
    }

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabInfo>, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::QueryTabs(query.clone()));

        Ok(state
            .windows
            .iter()
            .flat_map(|w| w.tabs.iter())
            .filter(|t| query.matches(t))
            .cloned()
            .collect())
    }

    async fn create_window(&self, options: CreateWindowOptions) -> Result<WindowInfo, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::CreateWindow(options.clone()));

        if state.faults.windows {
            return Err(PlatformError::rejected("windows.create", "window creation disabled"));
        }
        if state.faults.positioned_windows && options.has_position() {
            return Err(PlatformError::rejected(
                "windows.create",
                "Invalid value for bounds. Bounds must be at least 50% within visible screen space.",
            ));
        }

        let geometry = [
            Some(options.left.unwrap_or(0)),
            Some(options.top.unwrap_or(0)),
            Some(DEFAULT_WIDTH),
            Some(DEFAULT_HEIGHT),
        ];
        let id = state.add_window(geometry, &options.urls);
        if options.focused {
            state.focused = Some(id);
        }

        state.window_mut(id).map(|w| w.clone())
    }

    async fn update_window(
        &self,
        id: WindowId,
        options: UpdateWindowOptions,
    ) -> Result<WindowInfo, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::UpdateWindow(id, options.clone()));

        let window = state.window_mut(id)?;
        if let Some(new_state) = options.state {
            window.state = new_state;
        }
        Ok(window.clone())
    }

    async fn create_tab(&self, options: CreateTabOptions) -> Result<TabInfo, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::CreateTab(options.clone()));

        if state.faults.tabs {
            return Err(PlatformError::rejected("tabs.create", "tab creation disabled"));
        }

        let mut tab = state.new_tab(options.window_id, &options.url);
        tab.active = true;
        tab.pinned = options.pinned;
        let id = tab.id.clone();

        let window = state.window_mut(options.window_id)?;
        window.tabs.iter_mut().for_each(|t| t.active = false);
        window.tabs.push(tab);
        settle_tabs(window);

        window
            .tabs
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(PlatformError::TabNotFound(id))
    }

    async fn update_tab(&self, id: &TabId, options: UpdateTabOptions) -> Result<TabInfo, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::UpdateTab(id.clone(), options.clone()));

        let window = state
            .windows
            .iter_mut()
            .find(|w| w.tabs.iter().any(|t| &t.id == id))
            .ok_or_else(|| PlatformError::TabNotFound(id.clone()))?;

        if let Some(tab) = window.tabs.iter_mut().find(|t| &t.id == id) {
            if let Some(url) = &options.url {
                tab.url = url.clone();
            }
            if let Some(pinned) = options.pinned {
                tab.pinned = pinned;
            }
        }
        settle_tabs(window);

        window
            .tabs
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| PlatformError::TabNotFound(id.clone()))
    }

    async fn measure_screen(&self, tab: &TabId) -> Result<ScreenMetrics, PlatformError> {
        let mut state = self.state.lock();
        state.calls.push(BrowserCall::MeasureScreen(tab.clone()));

        if state.faults.measurement {
            return Err(PlatformError::ScriptInjection("Cannot access contents of the page".to_string()));
        }

        let target = state
            .find_tab(tab)
            .ok_or_else(|| PlatformError::TabNotFound(tab.clone()))?;
        if !target.is_web_page() {
            return Err(PlatformError::ScriptInjection(format!(
                "Cannot access a {} URL",
                target.url.split(':').next().unwrap_or_default()
            )));
        }

        Ok(state.screen)
    }
}

#[cfg(test)]
#[path = "simulated_tests.rs"]
mod tests;
