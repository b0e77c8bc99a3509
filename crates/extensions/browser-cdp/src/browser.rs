//! [`BrowserPlatform`] over CDP.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use linkstart_config::BrowserConfig;
use linkstart_protocols::{
    BrowserPlatform, CreateTabOptions, CreateWindowOptions, PlatformError, ScreenMetrics, TabId,
    TabInfo, TabQuery, UpdateTabOptions, UpdateWindowOptions, WindowId, WindowInfo,
};

use crate::client::CdpClient;
use crate::discovery::CdpEndpoint;
use crate::error::CdpError;
use crate::protocol::{
    CreatedTarget, EvaluateResult, PageInfo, WindowBounds, WindowBoundsResult, WindowForTarget,
};

const BLANK_URL: &str = "about:blank";

const SCREEN_EXPRESSION: &str =
    "({ availWidth: window.screen.availWidth, availHeight: window.screen.availHeight })";

/// Chrome driven through its remote-debugging endpoint.
pub struct CdpBrowser {
    client: CdpClient,
}

impl CdpBrowser {
    pub async fn connect(config: &BrowserConfig) -> Result<Self, CdpError> {
        let timeout = Duration::from_secs(config.request_timeout_seconds);
        let endpoint = CdpEndpoint::new(&config.endpoint, timeout)?;
        let client = CdpClient::connect(endpoint, timeout).await?;
        Ok(Self { client })
    }

    async fn window_for_target(&self, target_id: &str) -> Result<WindowForTarget, CdpError> {
        self.client
            .call_as("Browser.getWindowForTarget", json!({ "targetId": target_id }), None)
            .await
    }

    async fn create_target(&self, url: &str, extra: serde_json::Value) -> Result<String, CdpError> {
        let mut params = json!({ "url": url });
        if let (Some(params), Some(extra)) = (params.as_object_mut(), extra.as_object()) {
            params.extend(extra.clone());
        }
        let created: CreatedTarget = self.client.call_as("Target.createTarget", params, None).await?;
        Ok(created.target_id)
    }

    /// Every page target as a tab, grouped by window in listing order.
    async fn all_tabs(&self) -> Result<Vec<TabInfo>, CdpError> {
        let pages = self.client.endpoint().list_pages().await?;
        let mut placed = Vec::with_capacity(pages.len());
        for page in pages {
            let window = self.window_for_target(&page.id).await?;
            placed.push((window.window_id, page));
        }
        Ok(tabs_from_pages(placed))
    }

    async fn window_info(&self, target_id: &str, tabs: Vec<TabInfo>) -> Result<WindowInfo, CdpError> {
        let window = self.window_for_target(target_id).await?;
        Ok(window_info(window.window_id, window.bounds, tabs))
    }

    async fn tab_info(&self, target_id: &str, url: &str, pinned: bool) -> Result<TabInfo, CdpError> {
        let tabs = self.all_tabs().await?;
        if let Some(tab) = tabs.into_iter().find(|t| t.id == target_id) {
            return Ok(tab);
        }

        let window = self.window_for_target(target_id).await?;
        Ok(TabInfo {
            id: target_id.to_string(),
            window_id: window.window_id,
            index: 0,
            url: url.to_string(),
            active: false,
            pinned,
        })
    }

    async fn navigate(&self, target_id: &str, url: &str) -> Result<(), CdpError> {
        let session = self.client.attach(target_id).await?;
        let result = self
            .client
            .call("Page.navigate", Some(json!({ "url": url })), Some(&session))
            .await;
        self.client.detach(&session).await;
        result.map(|_| ())
    }

    async fn evaluate(&self, target_id: &str, expression: &str) -> Result<EvaluateResult, CdpError> {
        let session = self.client.attach(target_id).await?;
        let result = self
            .client
            .call_as(
                "Runtime.evaluate",
                json!({ "expression": expression, "returnByValue": true }),
                Some(&session),
            )
            .await;
        self.client.detach(&session).await;
        result
    }
}

fn window_info(id: WindowId, bounds: WindowBounds, tabs: Vec<TabInfo>) -> WindowInfo {
    WindowInfo {
        id,
        left: bounds.left,
        top: bounds.top,
        width: bounds.width,
        height: bounds.height,
        state: bounds.window_state.unwrap_or_default(),
        tabs,
    }
}

/// Build tabs from `(window id, page)` pairs in `/json/list` order.
///
/// The first page of each window is taken as its active tab, since the list
/// is ordered by recent activity.
fn tabs_from_pages(pages: Vec<(WindowId, PageInfo)>) -> Vec<TabInfo> {
    let mut tabs: Vec<TabInfo> = Vec::with_capacity(pages.len());
    for (window_id, page) in pages {
        let index = tabs.iter().filter(|t| t.window_id == window_id).count();
        tabs.push(TabInfo {
            id: page.id,
            window_id,
            index,
            url: page.url,
            active: index == 0,
            pinned: false,
        });
    }
    tabs
}

fn screen_metrics(result: EvaluateResult) -> Result<ScreenMetrics, CdpError> {
    if let Some(exception) = result.exception_details {
        return Err(CdpError::JavaScript(exception.message()));
    }
    let value = result
        .result
        .value
        .ok_or_else(|| CdpError::InvalidResponse("Measurement returned no value".to_string()))?;
    Ok(serde_json::from_value(value)?)
}

fn warn_pin_unsupported(url: &str) {
    warn!("Tab pinning is not available over CDP, leaving {} unpinned", url);
}

#[async_trait]
impl BrowserPlatform for CdpBrowser {
    async fn last_focused_window(&self) -> Result<Option<WindowInfo>, PlatformError> {
        let op = "windows.getLastFocused";
        let tabs = self.all_tabs().await.map_err(|e| e.into_platform(op))?;
        let Some(focused) = tabs.first().map(|t| t.window_id) else {
            return Ok(None);
        };

        let target = tabs[0].id.clone();
        let tabs: Vec<TabInfo> = tabs.into_iter().filter(|t| t.window_id == focused).collect();
        let window = self
            .window_info(&target, tabs)
            .await
            .map_err(|e| e.into_platform(op))?;
        Ok(Some(window))
    }

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabInfo>, PlatformError> {
        let tabs = self.all_tabs().await.map_err(|e| e.into_platform("tabs.query"))?;
        Ok(tabs.into_iter().filter(|t| query.matches(t)).collect())
    }

    async fn create_window(&self, options: CreateWindowOptions) -> Result<WindowInfo, PlatformError> {
        let op = "windows.create";
        let mut urls = options.urls.iter();
        let first = urls.next().map(String::as_str).unwrap_or(BLANK_URL);

        let mut extra = json!({ "newWindow": true, "background": !options.focused });
        if let Some(left) = options.left {
            extra["left"] = json!(left);
        }
        if let Some(top) = options.top {
            extra["top"] = json!(top);
        }

        let target = self.create_target(first, extra).await.map_err(|e| e.into_platform(op))?;
        let window = self.window_for_target(&target).await.map_err(|e| e.into_platform(op))?;
        debug!("Created window {} with target {}", window.window_id, target);

        let mut targets = vec![(target, first.to_string())];
        for url in urls {
            // New targets open in the most recently focused window, which is the new one.
            let id = self
                .create_target(url, json!({}))
                .await
                .map_err(|e| e.into_platform(op))?;
            targets.push((id, url.clone()));
        }

        let tabs = targets
            .into_iter()
            .enumerate()
            .map(|(index, (id, url))| TabInfo {
                id,
                window_id: window.window_id,
                index,
                url,
                active: index == 0,
                pinned: false,
            })
            .collect();
        Ok(window_info(window.window_id, window.bounds, tabs))
    }

    async fn update_window(
        &self,
        id: WindowId,
        options: UpdateWindowOptions,
    ) -> Result<WindowInfo, PlatformError> {
        let op = "windows.update";
        if let Some(state) = options.state {
            let bounds = WindowBounds {
                window_state: Some(state),
                ..Default::default()
            };
            self.client
                .call(
                    "Browser.setWindowBounds",
                    Some(json!({ "windowId": id, "bounds": bounds })),
                    None,
                )
                .await
                .map_err(|e| e.into_platform(op))?;
        }

        let result: WindowBoundsResult = self
            .client
            .call_as("Browser.getWindowBounds", json!({ "windowId": id }), None)
            .await
            .map_err(|e| e.into_platform(op))?;
        Ok(window_info(id, result.bounds, Vec::new()))
    }

    async fn create_tab(&self, options: CreateTabOptions) -> Result<TabInfo, PlatformError> {
        let op = "tabs.create";
        if options.pinned {
            warn_pin_unsupported(&options.url);
        }

        let target = self
            .create_target(&options.url, json!({}))
            .await
            .map_err(|e| e.into_platform(op))?;
        let tab = self
            .tab_info(&target, &options.url, false)
            .await
            .map_err(|e| e.into_platform(op))?;
        if tab.window_id != options.window_id {
            warn!(
                "Tab {} opened in window {} instead of {}",
                tab.id, tab.window_id, options.window_id
            );
        }
        Ok(tab)
    }

    async fn update_tab(&self, id: &TabId, options: UpdateTabOptions) -> Result<TabInfo, PlatformError> {
        let op = "tabs.update";
        if let Some(url) = &options.url {
            self.navigate(id, url).await.map_err(|e| e.into_platform(op))?;
        }
        if options.pinned == Some(true) {
            warn_pin_unsupported(options.url.as_deref().unwrap_or(id));
        }

        let url = options.url.as_deref().unwrap_or_default();
        self.tab_info(id, url, false).await.map_err(|e| e.into_platform(op))
    }

    async fn measure_screen(&self, tab: &TabId) -> Result<ScreenMetrics, PlatformError> {
        let op = "scripting.executeScript";
        let result = self
            .evaluate(tab, SCREEN_EXPRESSION)
            .await
            .map_err(|e| e.into_platform(op))?;
        screen_metrics(result).map_err(|e| e.into_platform(op))
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
