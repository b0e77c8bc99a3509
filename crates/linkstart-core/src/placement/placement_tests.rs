use super::*;
use crate::simulated::{BrowserCall, SimulatedBrowser};
use linkstart_config::PlacementConfig;
use linkstart_protocols::{Group, UpdateTabOptions, UrlEntry, WindowState};

fn entry(url: &str, group: Group, pinned: bool) -> UrlEntry {
    UrlEntry {
        url: url.to_string(),
        title: String::new(),
        favicon: String::new(),
        group,
        pinned,
    }
}

fn pinned_urls(browser: &SimulatedBrowser, window_id: i64) -> Vec<String> {
    browser
        .window(window_id)
        .unwrap()
        .tabs
        .into_iter()
        .filter(|t| t.pinned)
        .map(|t| t.url)
        .collect()
}

#[tokio::test]
async fn test_current_window_nothing_to_place() {
    let browser = SimulatedBrowser::new();
    let placed = place_current_window(&browser, &[]).await.unwrap();
    assert!(placed.is_none());
    assert!(browser.calls().is_empty());
}

#[tokio::test]
async fn test_current_window_applies_pin_to_reused_tab() {
    let browser = SimulatedBrowser::new().with_window(0, 0, 800, 600, &["https://start.example/"]);
    let entries = [entry("https://a.com/", Group::Current, true)];

    let placed = place_current_window(&browser, &entries).await.unwrap().unwrap();

    assert!(placed.reused);
    assert!(!placed.fallback);
    let window = browser.window(placed.window_id).unwrap();
    assert_eq!(window.tabs.len(), 1);
    assert!(window.tabs[0].pinned);
    assert_eq!(window.tabs[0].url, "https://a.com/");
}

#[tokio::test]
async fn test_current_window_sends_explicit_unpin() {
    let browser = SimulatedBrowser::new().with_window(0, 0, 800, 600, &["https://start.example/"]);
    let entries = [entry("https://a.com/", Group::Current, false)];

    place_current_window(&browser, &entries).await.unwrap();

    let expected = UpdateTabOptions {
        url: Some("https://a.com/".to_string()),
        pinned: Some(false),
    };
    assert!(
        browser
            .calls()
            .iter()
            .any(|c| matches!(c, BrowserCall::UpdateTab(_, options) if *options == expected))
    );
}

#[tokio::test]
async fn test_current_window_without_any_window() {
    let browser = SimulatedBrowser::new();
    let entries = [
        entry("https://a.com/", Group::Current, true),
        entry("https://b.com/", Group::Current, false),
        entry("https://c.com/", Group::Current, true),
    ];

    let placed = place_current_window(&browser, &entries).await.unwrap().unwrap();

    assert!(!placed.reused);
    assert!(placed.fallback);
    assert_eq!(placed.tab_count, 3);
    assert_eq!(browser.windows().len(), 1);
    assert_eq!(pinned_urls(&browser, placed.window_id), vec!["https://a.com/", "https://c.com/"]);
}

#[tokio::test]
async fn test_current_window_without_active_tab() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 800, 600, &["https://start.example/"])
        .without_active_tab();
    let entries = [
        entry("https://a.com/", Group::Current, false),
        entry("https://b.com/", Group::Current, false),
    ];

    let placed = place_current_window(&browser, &entries).await.unwrap().unwrap();

    assert!(placed.fallback);
    assert_eq!(browser.windows().len(), 2);
    let urls: Vec<String> = browser
        .window(placed.window_id)
        .unwrap()
        .tabs
        .into_iter()
        .map(|t| t.url)
        .collect();
    assert_eq!(urls, vec!["https://a.com/", "https://b.com/"]);
}

#[tokio::test]
async fn test_current_window_tab_failure_is_fatal() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 800, 600, &["https://start.example/"])
        .fail_tab_creation();
    let entries = [
        entry("https://a.com/", Group::Current, false),
        entry("https://b.com/", Group::Current, false),
    ];

    let result = place_current_window(&browser, &entries).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_side_window_call_sequence() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 1000, 800, &["https://start.example/"])
        .with_screen(2560, 1440);
    let entries = [
        entry("https://c.com/", Group::Side, false),
        entry("https://d.com/", Group::Side, true),
    ];

    let placed = place_side_window(&browser, &entries, &PlacementConfig::default())
        .await
        .unwrap()
        .unwrap();

    let calls = browser.calls();
    let kinds: Vec<&str> = calls
        .iter()
        .map(|c| match c {
            BrowserCall::LastFocusedWindow => "focused",
            BrowserCall::QueryTabs(_) => "query",
            BrowserCall::MeasureScreen(_) => "measure",
            BrowserCall::CreateWindow(_) => "window",
            BrowserCall::CreateTab(_) => "tab",
            BrowserCall::UpdateTab(_, _) => "update_tab",
            BrowserCall::UpdateWindow(_, _) => "update_window",
        })
        .collect();
    assert_eq!(kinds, vec!["focused", "query", "measure", "window", "tab", "update_window"]);

    let window = browser.window(placed.window_id).unwrap();
    assert_eq!(window.left, Some(1000));
    assert_eq!(window.state, WindowState::Maximized);
    // Pinned tabs move to the front of the strip.
    assert_eq!(window.tabs[0].url, "https://d.com/");
    assert!(window.tabs[0].pinned);
}

#[tokio::test]
async fn test_side_window_without_focused_window_is_unpositioned() {
    let browser = SimulatedBrowser::new();
    let entries = [entry("https://c.com/", Group::Side, false)];

    let placed = place_side_window(&browser, &entries, &PlacementConfig::default())
        .await
        .unwrap()
        .unwrap();

    assert!(!placed.fallback);
    let creates: Vec<BrowserCall> = browser
        .calls()
        .into_iter()
        .filter(|c| matches!(c, BrowserCall::CreateWindow(_)))
        .collect();
    assert_eq!(creates.len(), 1);
    assert!(matches!(&creates[0], BrowserCall::CreateWindow(o) if !o.has_position()));
}

#[tokio::test]
async fn test_side_window_fallback_failure_is_fatal() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 1000, 800, &["https://start.example/"])
        .fail_window_creation();
    let entries = [entry("https://c.com/", Group::Side, false)];

    let result = place_side_window(&browser, &entries, &PlacementConfig::default()).await;

    assert!(result.is_err());
    let creates = browser
        .calls()
        .iter()
        .filter(|c| matches!(c, BrowserCall::CreateWindow(_)))
        .count();
    assert_eq!(creates, 2);
}

#[tokio::test]
async fn test_side_window_tab_failure_is_not_retried() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 1000, 800, &["https://start.example/"])
        .fail_tab_creation();
    let entries = [
        entry("https://c.com/", Group::Side, false),
        entry("https://d.com/", Group::Side, false),
    ];

    let result = place_side_window(&browser, &entries, &PlacementConfig::default()).await;

    assert!(result.is_err());
    assert_eq!(browser.windows().len(), 2);
}
