//! Side-window geometry.

use linkstart_config::PlacementConfig;
use linkstart_protocols::{ScreenMetrics, WindowInfo};

/// Resolved available screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// Computed geometry for the group-2 window.
///
/// `width` and `height` are informational: the window is maximized after
/// its tabs are created. The position only selects the display that the
/// maximize targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideWindowPlan {
    pub width: u32,
    pub height: u32,
    pub left: Option<i32>,
    pub top: Option<i32>,
}

impl SideWindowPlan {
    /// Requested position, if any.
    pub fn position(&self) -> Option<(i32, i32)> {
        match (self.left, self.top) {
            (Some(left), Some(top)) => Some((left, top)),
            _ => None,
        }
    }
}

/// Measured values win; each missing or zero dimension falls back to the
/// configured default independently.
pub fn resolve_screen(metrics: Option<ScreenMetrics>, config: &PlacementConfig) -> ScreenSize {
    let metrics = metrics.unwrap_or_default();
    ScreenSize {
        width: metrics
            .avail_width
            .filter(|w| *w > 0)
            .unwrap_or(config.fallback_screen_width),
        height: metrics
            .avail_height
            .filter(|h| *h > 0)
            .unwrap_or(config.fallback_screen_height),
    }
}

/// Place the new window immediately right of `current`, top-aligned.
///
/// Without a focused window no position is requested. Missing geometry on
/// the focused window counts as `left = 0`, `top = 0` and a width equal to
/// the desired width.
pub fn plan_side_window(current: Option<&WindowInfo>, screen: ScreenSize, max_width: u32) -> SideWindowPlan {
    let width = max_width.min(screen.width);
    let height = screen.height;

    let Some(current) = current else {
        return SideWindowPlan {
            width,
            height,
            left: None,
            top: None,
        };
    };

    let fallback_width = i32::try_from(width).unwrap_or(i32::MAX);
    let left = current
        .left
        .unwrap_or(0)
        .saturating_add(current.width.unwrap_or(fallback_width));

    SideWindowPlan {
        width,
        height,
        left: Some(left),
        top: Some(current.top.unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(left: Option<i32>, top: Option<i32>, width: Option<i32>) -> WindowInfo {
        WindowInfo {
            id: 1,
            left,
            top,
            width,
            height: Some(900),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_screen_uses_measurement() {
        let metrics = ScreenMetrics {
            avail_width: Some(2560),
            avail_height: Some(1400),
        };
        let screen = resolve_screen(Some(metrics), &PlacementConfig::default());
        assert_eq!(screen, ScreenSize { width: 2560, height: 1400 });
    }

    #[test]
    fn test_resolve_screen_defaults_without_measurement() {
        let screen = resolve_screen(None, &PlacementConfig::default());
        assert_eq!(screen, ScreenSize { width: 1920, height: 1080 });
    }

    #[test]
    fn test_resolve_screen_falls_back_per_dimension() {
        let metrics = ScreenMetrics {
            avail_width: Some(0),
            avail_height: Some(1200),
        };
        let screen = resolve_screen(Some(metrics), &PlacementConfig::default());
        assert_eq!(screen, ScreenSize { width: 1920, height: 1200 });
    }

    #[test]
    fn test_desired_width_is_capped() {
        let plan = plan_side_window(None, ScreenSize { width: 1920, height: 1080 }, 1280);
        assert_eq!(plan.width, 1280);
        assert_eq!(plan.height, 1080);

        let plan = plan_side_window(None, ScreenSize { width: 1024, height: 768 }, 1280);
        assert_eq!(plan.width, 1024);
    }

    #[test]
    fn test_no_focused_window_means_no_position() {
        let plan = plan_side_window(None, ScreenSize { width: 1920, height: 1080 }, 1280);
        assert_eq!(plan.position(), None);
    }

    #[test]
    fn test_position_right_of_current() {
        let current = window(Some(100), Some(40), Some(1200));
        let plan = plan_side_window(Some(&current), ScreenSize { width: 1920, height: 1080 }, 1280);
        assert_eq!(plan.position(), Some((1300, 40)));
    }

    #[test]
    fn test_missing_geometry_defaults() {
        let current = window(None, None, None);
        let plan = plan_side_window(Some(&current), ScreenSize { width: 1920, height: 1080 }, 1280);
        assert_eq!(plan.position(), Some((1280, 0)));
    }

    #[test]
    fn test_position_saturates() {
        let current = window(Some(i32::MAX - 10), Some(0), Some(1000));
        let plan = plan_side_window(Some(&current), ScreenSize { width: 1920, height: 1080 }, 1280);
        assert_eq!(plan.left, Some(i32::MAX));
    }
}
