use super::*;

fn urls(window: &WindowInfo) -> Vec<&str> {
    window.tabs.iter().map(|t| t.url.as_str()).collect()
}

#[tokio::test]
async fn test_no_windows_means_no_focus() {
    let browser = SimulatedBrowser::new();
    assert!(browser.last_focused_window().await.unwrap().is_none());
    assert_eq!(browser.calls(), vec![BrowserCall::LastFocusedWindow]);
}

#[tokio::test]
async fn test_seeded_window_is_focused_with_active_first_tab() {
    let browser = SimulatedBrowser::new().with_window(10, 20, 800, 600, &["https://a.com/", "https://b.com/"]);

    let window = browser.last_focused_window().await.unwrap().unwrap();
    assert_eq!(window.left, Some(10));
    assert_eq!(window.width, Some(800));
    assert_eq!(urls(&window), vec!["https://a.com/", "https://b.com/"]);

    let active = browser.query_tabs(TabQuery::active_in(window.id)).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].url, "https://a.com/");
}

#[tokio::test]
async fn test_without_active_tab() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 800, 600, &["https://a.com/"])
        .without_active_tab();
    let window = browser.last_focused_window().await.unwrap().unwrap();
    let active = browser.query_tabs(TabQuery::active_in(window.id)).await.unwrap();
    assert!(active.is_empty());
}

#[tokio::test]
async fn test_create_window_without_urls_opens_new_tab_page() {
    let browser = SimulatedBrowser::new();
    let window = browser.create_window(CreateWindowOptions::new(vec![])).await.unwrap();
    assert_eq!(urls(&window), vec![NEW_TAB_URL]);
    assert_eq!(browser.focused_window_id(), Some(window.id));
}

#[tokio::test]
async fn test_pinning_moves_tab_into_pinned_section() {
    let browser = SimulatedBrowser::new().with_window(
        0,
        0,
        800,
        600,
        &["https://a.com/", "https://b.com/", "https://c.com/"],
    );
    let window = browser.last_focused_window().await.unwrap().unwrap();
    let third = window.tabs[2].id.clone();

    let tab = browser.update_tab(&third, UpdateTabOptions::pin()).await.unwrap();
    assert_eq!(tab.index, 0);
    assert!(tab.pinned);

    let window = browser.window(window.id).unwrap();
    assert_eq!(urls(&window), vec!["https://c.com/", "https://a.com/", "https://b.com/"]);
    let indices: Vec<usize> = window.tabs.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_created_tab_becomes_active() {
    let browser = SimulatedBrowser::new().with_window(0, 0, 800, 600, &["https://a.com/"]);
    let window_id = browser.focused_window_id().unwrap();

    browser
        .create_tab(CreateTabOptions {
            url: "https://b.com/".to_string(),
            window_id,
            pinned: false,
        })
        .await
        .unwrap();

    let active = browser.query_tabs(TabQuery::active_in(window_id)).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].url, "https://b.com/");
}

#[tokio::test]
async fn test_create_tab_in_unknown_window() {
    let browser = SimulatedBrowser::new();
    let result = browser
        .create_tab(CreateTabOptions {
            url: "https://b.com/".to_string(),
            window_id: 42,
            pinned: false,
        })
        .await;
    assert!(matches!(result, Err(PlatformError::WindowNotFound(42))));
}

#[tokio::test]
async fn test_positioned_window_fault_only_affects_positioned_requests() {
    let browser = SimulatedBrowser::new().fail_positioned_windows();

    let positioned = CreateWindowOptions::new(vec!["https://a.com/".to_string()]).at(1280, 0);
    assert!(browser.create_window(positioned).await.is_err());

    let plain = CreateWindowOptions::new(vec!["https://a.com/".to_string()]);
    assert!(browser.create_window(plain).await.is_ok());
    assert_eq!(browser.windows().len(), 1);
}

#[tokio::test]
async fn test_update_window_maximize() {
    let browser = SimulatedBrowser::new().with_window(0, 0, 800, 600, &["https://a.com/"]);
    let id = browser.focused_window_id().unwrap();

    let window = browser.update_window(id, UpdateWindowOptions::maximize()).await.unwrap();
    assert_eq!(window.state, WindowState::Maximized);

    let missing = browser.update_window(99, UpdateWindowOptions::maximize()).await;
    assert!(matches!(missing, Err(PlatformError::WindowNotFound(99))));
}

#[tokio::test]
async fn test_measure_screen() {
    let browser = SimulatedBrowser::new()
        .with_window(0, 0, 800, 600, &["https://a.com/", "chrome://settings/"])
        .with_screen(2560, 1440);
    let window = browser.last_focused_window().await.unwrap().unwrap();

    let metrics = browser.measure_screen(&window.tabs[0].id).await.unwrap();
    assert_eq!(metrics.avail_width, Some(2560));
    assert_eq!(metrics.avail_height, Some(1440));

    let restricted = browser.measure_screen(&window.tabs[1].id).await;
    assert!(matches!(restricted, Err(PlatformError::ScriptInjection(_))));
}

#[tokio::test]
async fn test_call_log_records_order() {
    let browser = SimulatedBrowser::new().with_window(0, 0, 800, 600, &["https://a.com/"]);
    let id = browser.focused_window_id().unwrap();

    browser.last_focused_window().await.unwrap();
    browser.update_window(id, UpdateWindowOptions::maximize()).await.unwrap();

    assert_eq!(
        browser.calls(),
        vec![
            BrowserCall::LastFocusedWindow,
            BrowserCall::UpdateWindow(id, UpdateWindowOptions::maximize()),
        ]
    );

    browser.clear_calls();
    assert!(browser.calls().is_empty());
}
