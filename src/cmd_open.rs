//! Placement commands: open, lifecycle triggers, raw messages.

use std::sync::Arc;

use tracing::{info, warn};

use linkstart_browser_cdp::CdpBrowser;
use linkstart_config::Config;
use linkstart_core::{LifecycleEvent, LifecycleTrigger, MessageHandler, Orchestrator, SimulatedBrowser};
use linkstart_metadata_web::HttpMetadataFetcher;
use linkstart_protocols::{EntryStore, PlacementResult, WindowInfo};

const DRY_RUN_START_PAGE: &str = "chrome://newtab/";

/// Open all stored entries.
pub(crate) async fn open(
    config: &Config,
    store: Arc<dyn EntryStore>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if dry_run {
        return open_simulated(config, store).await;
    }

    let browser = Arc::new(CdpBrowser::connect(&config.browser).await?);
    let orchestrator = Orchestrator::new(browser, store, config.placement.clone());
    finish(orchestrator.invoke().await)
}

async fn open_simulated(config: &Config, store: Arc<dyn EntryStore>) -> Result<(), Box<dyn std::error::Error>> {
    let width = i32::try_from(config.placement.max_window_width).unwrap_or(i32::MAX);
    let browser = Arc::new(SimulatedBrowser::new().with_window(0, 0, width, 800, &[DRY_RUN_START_PAGE]));
    let orchestrator = Orchestrator::new(browser.clone(), store, config.placement.clone());

    let result = orchestrator.invoke().await;
    for window in browser.windows() {
        print_window(&window);
    }
    finish(result)
}

fn print_window(window: &WindowInfo) {
    println!(
        "window {} at ({}, {}) {:?}",
        window.id,
        window.left.unwrap_or_default(),
        window.top.unwrap_or_default(),
        window.state
    );
    for tab in &window.tabs {
        let marker = if tab.pinned { "pinned" } else { "" };
        println!("  [{}] {} {}", tab.index, tab.url, marker);
    }
}

fn finish(result: PlacementResult) -> Result<(), Box<dyn std::error::Error>> {
    match result.error {
        None => {
            info!("All entries opened");
            Ok(())
        }
        Some(error) => Err(error.into()),
    }
}

/// Fire a lifecycle trigger and wait for the background placement.
///
/// Failures are logged only, the command itself always succeeds.
pub(crate) async fn lifecycle(
    config: &Config,
    store: Arc<dyn EntryStore>,
    event: LifecycleEvent,
) -> Result<(), Box<dyn std::error::Error>> {
    let browser = match CdpBrowser::connect(&config.browser).await {
        Ok(browser) => Arc::new(browser),
        Err(e) => {
            warn!("Skipping {} trigger: {}", event, e);
            return Ok(());
        }
    };

    let orchestrator = Arc::new(Orchestrator::new(browser, store, config.placement.clone()));
    let trigger = LifecycleTrigger::new(orchestrator, config.lifecycle.clone());
    if let Some(handle) = trigger.on_event(event) {
        if let Err(e) = handle.await {
            warn!("{} trigger task failed: {}", event, e);
        }
    }
    Ok(())
}

/// Handle one JSON request and print the JSON response.
pub(crate) async fn send(
    config: &Config,
    store: Arc<dyn EntryStore>,
    message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let browser = Arc::new(CdpBrowser::connect(&config.browser).await?);
    let orchestrator = Arc::new(Orchestrator::new(browser, store, config.placement.clone()));
    let fetcher = Arc::new(HttpMetadataFetcher::new(&config.metadata)?);

    let handler = MessageHandler::new(orchestrator, fetcher);
    let response = handler.handle_json(message).await?;
    println!("{}", response);
    Ok(())
}
