//! Group 1: the focused window.

use tracing::{debug, warn};

use linkstart_protocols::{
    BrowserPlatform, CreateTabOptions, CreateWindowOptions, PlatformError, TabQuery,
    UpdateTabOptions, UrlEntry,
};

use super::PlacedWindow;

/// Open `entries` in the focused window.
///
/// The active tab is navigated to the first entry and the remaining entries
/// are appended after it, in order. Without a focused window or an active
/// tab, a new window is created holding every entry instead.
///
/// Returns `Ok(None)` when there is nothing to place.
pub async fn place_current_window(
    browser: &dyn BrowserPlatform,
    entries: &[UrlEntry],
) -> Result<Option<PlacedWindow>, PlatformError> {
    let Some((first, rest)) = entries.split_first() else {
        return Ok(None);
    };

    let focused = browser.last_focused_window().await?;
    let active = match &focused {
        Some(window) => browser
            .query_tabs(TabQuery::active_in(window.id))
            .await?
            .into_iter()
            .next(),
        None => None,
    };

    let (Some(window), Some(tab)) = (focused, active) else {
        return open_in_new_window(browser, entries).await.map(Some);
    };

    debug!("Reusing tab {} of window {} for {}", tab.id, window.id, first.url);
    browser
        .update_tab(
            &tab.id,
            UpdateTabOptions {
                url: Some(first.url.clone()),
                pinned: Some(first.pinned),
            },
        )
        .await?;

    for entry in rest {
        browser
            .create_tab(CreateTabOptions {
                url: entry.url.clone(),
                window_id: window.id,
                pinned: entry.pinned,
            })
            .await?;
    }

    Ok(Some(PlacedWindow {
        window_id: window.id,
        reused: true,
        fallback: false,
        tab_count: entries.len(),
    }))
}

async fn open_in_new_window(
    browser: &dyn BrowserPlatform,
    entries: &[UrlEntry],
) -> Result<PlacedWindow, PlatformError> {
    debug!("No active tab in a focused window, opening {} entries in a new window", entries.len());

    let urls = entries.iter().map(|e| e.url.clone()).collect();
    let window = browser.create_window(CreateWindowOptions::new(urls)).await?;

    // Tab ids are taken from the creation snapshot: pinning reorders the strip.
    for (index, entry) in entries.iter().enumerate().filter(|(_, e)| e.pinned) {
        match window.tabs.get(index) {
            Some(tab) => {
                browser.update_tab(&tab.id, UpdateTabOptions::pin()).await?;
            }
            None => warn!("Window {} has no tab #{} to pin for {}", window.id, index, entry.url),
        }
    }

    Ok(PlacedWindow {
        window_id: window.id,
        reused: false,
        fallback: true,
        tab_count: entries.len(),
    })
}
