//! # LinkStart Core
//!
//! Opens a stored list of URLs across one or two browser windows.
//!
//! Entries in group 1 go into the focused window, reusing its active tab.
//! Entries in group 2 go into a new window placed to the right of the focused
//! one and maximized there. Both placements run in sequence on every
//! invocation and fail independently.

pub mod entry_list;
pub mod error;
pub mod handler;
pub mod lifecycle;
pub mod normalize;
pub mod orchestrator;
pub mod partition;
pub mod placement;
pub mod simulated;

pub use entry_list::EntryList;
pub use error::CoreError;
pub use handler::MessageHandler;
pub use lifecycle::{LifecycleEvent, LifecycleTrigger};
pub use normalize::EntryNormalizer;
pub use orchestrator::{GroupOutcome, Orchestrator, PlacementReport};
pub use partition::{Partition, partition};
pub use placement::{PlacedWindow, place_current_window, place_side_window};
pub use simulated::{BrowserCall, SimulatedBrowser};
