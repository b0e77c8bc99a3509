//! Placement orchestration.

use std::sync::Arc;

use tracing::{debug, info, warn};

use linkstart_config::PlacementConfig;
use linkstart_protocols::{
    BrowserPlatform, EntryStore, Group, PlacementResult, PlatformError, UrlEntry,
};

use crate::error::CoreError;
use crate::normalize::EntryNormalizer;
use crate::partition::partition;
use crate::placement::{PlacedWindow, place_current_window, place_side_window};

/// Outcome of one group's placement.
#[derive(Debug)]
pub enum GroupOutcome {
    /// The group had no entries.
    Skipped,
    Placed(PlacedWindow),
    Failed(PlatformError),
}

impl GroupOutcome {
    fn from_result(result: Result<Option<PlacedWindow>, PlatformError>) -> Self {
        match result {
            Ok(Some(placed)) => Self::Placed(placed),
            Ok(None) => Self::Skipped,
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn placed(&self) -> Option<&PlacedWindow> {
        match self {
            Self::Placed(placed) => Some(placed),
            _ => None,
        }
    }
}

/// Outcome of both groups.
#[derive(Debug)]
pub struct PlacementReport {
    pub current: GroupOutcome,
    pub side: GroupOutcome,
}

impl PlacementReport {
    pub fn is_success(&self) -> bool {
        !self.current.is_failed() && !self.side.is_failed()
    }

    /// Collapse into the aggregate result reported to callers.
    ///
    /// Failure messages are prefixed by their group and joined with `"; "`.
    pub fn to_result(&self) -> PlacementResult {
        let errors: Vec<String> = [(Group::Current, &self.current), (Group::Side, &self.side)]
            .into_iter()
            .filter_map(|(group, outcome)| match outcome {
                GroupOutcome::Failed(e) => Some(format!("{} placement failed: {}", group, e)),
                _ => None,
            })
            .collect();

        if errors.is_empty() {
            PlacementResult::ok()
        } else {
            PlacementResult::failed(errors.join("; "))
        }
    }
}

/// Opens the stored entries across the focused window and a side window.
///
/// Every invocation reads a fresh snapshot of the store and never writes it.
pub struct Orchestrator {
    browser: Arc<dyn BrowserPlatform>,
    store: Arc<dyn EntryStore>,
    config: PlacementConfig,
    normalizer: EntryNormalizer,
}

impl Orchestrator {
    pub fn new(
        browser: Arc<dyn BrowserPlatform>,
        store: Arc<dyn EntryStore>,
        config: PlacementConfig,
    ) -> Self {
        let normalizer = EntryNormalizer::from_config(&config);
        Self {
            browser,
            store,
            config,
            normalizer,
        }
    }

    pub fn browser(&self) -> &Arc<dyn BrowserPlatform> {
        &self.browser
    }

    pub fn store(&self) -> &Arc<dyn EntryStore> {
        &self.store
    }

    /// Read and normalize the stored list.
    pub async fn load_entries(&self) -> Result<Vec<UrlEntry>, CoreError> {
        let raw = self.store.get().await?;
        Ok(self.normalizer.normalize(&raw)?)
    }

    /// Read the store and place every entry.
    ///
    /// Errors are returned only when the list cannot be read or normalized,
    /// before anything is placed. Placement failures are in the report.
    pub async fn open_stored(&self) -> Result<PlacementReport, CoreError> {
        let entries = self.load_entries().await?;
        Ok(self.open_entries(entries).await)
    }

    /// Place group 1, then group 2. A failing group never prevents the other
    /// from being attempted, and nothing placed is rolled back.
    pub async fn open_entries(&self, entries: Vec<UrlEntry>) -> PlacementReport {
        let parts = partition(entries);
        info!(
            "Opening {} entries ({} in {}, {} in {})",
            parts.len(),
            parts.current.len(),
            Group::Current,
            parts.side.len(),
            Group::Side
        );

        let current = GroupOutcome::from_result(
            place_current_window(self.browser.as_ref(), &parts.current).await,
        );
        if let GroupOutcome::Failed(e) = &current {
            warn!("{} placement failed: {}", Group::Current, e);
        }

        let side = GroupOutcome::from_result(
            place_side_window(self.browser.as_ref(), &parts.side, &self.config).await,
        );
        if let GroupOutcome::Failed(e) = &side {
            warn!("{} placement failed: {}", Group::Side, e);
        }

        let report = PlacementReport { current, side };
        debug!("Placement report: {:?}", report);
        report
    }

    /// The "open all stored entries now" operation.
    pub async fn invoke(&self) -> PlacementResult {
        match self.open_stored().await {
            Ok(report) => report.to_result(),
            Err(e) => {
                warn!("Cannot open stored entries: {}", e);
                PlacementResult::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
