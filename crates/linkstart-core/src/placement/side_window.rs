//! Group 2: a new window beside the focused one.

use tracing::{debug, info, warn};

use linkstart_config::PlacementConfig;
use linkstart_protocols::{
    BrowserPlatform, CreateTabOptions, CreateWindowOptions, PlatformError, ScreenMetrics, TabQuery,
    UpdateTabOptions, UpdateWindowOptions, UrlEntry, WindowInfo,
};

use super::PlacedWindow;
use super::geometry::{plan_side_window, resolve_screen};

/// Open `entries` in a new window right of the focused one, then maximize it.
///
/// If the platform rejects the positioned creation, the window is created
/// again without a position and placement continues identically. Failures
/// after the window exists are returned as-is and never retried.
///
/// Returns `Ok(None)` when there is nothing to place.
pub async fn place_side_window(
    browser: &dyn BrowserPlatform,
    entries: &[UrlEntry],
    config: &PlacementConfig,
) -> Result<Option<PlacedWindow>, PlatformError> {
    let Some((first, rest)) = entries.split_first() else {
        return Ok(None);
    };

    let focused = match browser.last_focused_window().await {
        Ok(window) => window,
        Err(e) => {
            warn!("Focused window unavailable, placing without position: {}", e);
            None
        }
    };

    let metrics = probe_screen(browser, focused.as_ref()).await;
    let screen = resolve_screen(metrics, config);
    let plan = plan_side_window(focused.as_ref(), screen, config.max_window_width);
    debug!(
        "Side window plan: {}x{} at {:?} (screen {}x{})",
        plan.width, plan.height, plan.position(), screen.width, screen.height
    );

    let unpositioned = CreateWindowOptions::new(vec![first.url.clone()]);
    let (window, fallback) = match plan.position() {
        Some((left, top)) => match browser.create_window(unpositioned.clone().at(left, top)).await {
            Ok(window) => (window, false),
            Err(e) => {
                warn!("Positioned window rejected at ({}, {}): {}, retrying without position", left, top, e);
                (browser.create_window(unpositioned).await?, true)
            }
        },
        None => (browser.create_window(unpositioned).await?, false),
    };

    fill_window(browser, &window, first, rest).await?;
    browser.update_window(window.id, UpdateWindowOptions::maximize()).await?;

    info!("Opened {} entries in window {}", entries.len(), window.id);
    Ok(Some(PlacedWindow {
        window_id: window.id,
        reused: false,
        fallback,
        tab_count: entries.len(),
    }))
}

async fn fill_window(
    browser: &dyn BrowserPlatform,
    window: &WindowInfo,
    first: &UrlEntry,
    rest: &[UrlEntry],
) -> Result<(), PlatformError> {
    if first.pinned {
        match window.tabs.first() {
            Some(tab) => {
                browser.update_tab(&tab.id, UpdateTabOptions::pin()).await?;
            }
            None => warn!("Window {} has no tab to pin for {}", window.id, first.url),
        }
    }

    for entry in rest {
        browser
            .create_tab(CreateTabOptions {
                url: entry.url.clone(),
                window_id: window.id,
                pinned: entry.pinned,
            })
            .await?;
    }
    Ok(())
}

/// Measure the screen through the active tab of `focused`, or its first tab
/// when none is active.
///
/// Only plain web pages are measured. Every failure is absorbed and yields
/// `None`.
pub async fn probe_screen(browser: &dyn BrowserPlatform, focused: Option<&WindowInfo>) -> Option<ScreenMetrics> {
    let window = focused?;

    let tab = match browser.query_tabs(TabQuery::active_in(window.id)).await {
        Ok(tabs) => tabs
            .into_iter()
            .next()
            .or_else(|| window.active_or_first_tab().cloned())?,
        Err(e) => {
            debug!("Active tab lookup failed, skipping screen measurement: {}", e);
            return None;
        }
    };

    if !tab.is_web_page() {
        debug!("Skipping screen measurement on {}", tab.url);
        return None;
    }

    match browser.measure_screen(&tab.id).await {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            debug!("Screen measurement failed: {}", e);
            None
        }
    }
}
