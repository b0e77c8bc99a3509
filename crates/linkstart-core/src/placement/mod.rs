//! Group placement strategies.
//!
//! Group 1 reuses the focused window. Group 2 opens a new window beside it
//! and maximizes it there. Both issue tab creations strictly one after the
//! other, since the resulting tab order follows creation order.

mod current_window;
mod geometry;
mod side_window;

pub use current_window::place_current_window;
pub use geometry::{ScreenSize, SideWindowPlan, plan_side_window, resolve_screen};
pub use side_window::{place_side_window, probe_screen};

use linkstart_protocols::WindowId;

/// Where a group ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedWindow {
    pub window_id: WindowId,
    /// The focused window was reused instead of creating one.
    pub reused: bool,
    /// A fallback window was created: for group 1 because no active tab was
    /// found, for group 2 because the positioned creation was rejected.
    pub fallback: bool,
    /// Number of entries placed.
    pub tab_count: usize,
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
