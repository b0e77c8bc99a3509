//! Automatic invocation on browser lifecycle events.

use std::fmt;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, warn};

use linkstart_config::LifecycleConfig;

use crate::orchestrator::Orchestrator;

/// Browser lifecycle signals that open the stored entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The browser started.
    Startup,
    /// The extension was installed or updated.
    Installed,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Startup => write!(f, "startup"),
            Self::Installed => write!(f, "installed"),
        }
    }
}

/// Runs the orchestrator in the background when a lifecycle event fires.
///
/// Nobody awaits the outcome: failures are logged and dropped.
pub struct LifecycleTrigger {
    orchestrator: Arc<Orchestrator>,
    config: LifecycleConfig,
}

impl LifecycleTrigger {
    pub fn new(orchestrator: Arc<Orchestrator>, config: LifecycleConfig) -> Self {
        Self {
            orchestrator,
            config,
        }
    }

    pub fn is_enabled(&self, event: LifecycleEvent) -> bool {
        match event {
            LifecycleEvent::Startup => self.config.open_on_startup,
            LifecycleEvent::Installed => self.config.open_on_install,
        }
    }

    /// Spawn the invocation for `event`. Returns `None` when the event is disabled.
    ///
    /// Must be called within a tokio runtime.
    pub fn on_event(&self, event: LifecycleEvent) -> Option<JoinHandle<()>> {
        if !self.is_enabled(event) {
            debug!("Lifecycle event {} is disabled", event);
            return None;
        }

        let orchestrator = self.orchestrator.clone();
        let span = tracing::info_span!("lifecycle", event = %event);
        Some(tokio::spawn(run(orchestrator, event).instrument(span)))
    }
}

/// One store snapshot drives both the emptiness check and the placement.
async fn run(orchestrator: Arc<Orchestrator>, event: LifecycleEvent) {
    let entries = match orchestrator.load_entries().await {
        Ok(entries) if entries.is_empty() => {
            debug!("No stored entries, nothing to open on {}", event);
            return;
        }
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot load stored entries on {}: {}", event, e);
            return;
        }
    };

    let report = orchestrator.open_entries(entries).await;
    match report.to_result().error {
        None => info!("Opened stored entries on {}", event),
        Some(error) => warn!("Opening stored entries on {} failed: {}", event, error),
    }
}
