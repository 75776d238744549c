//! Browser viewport queries.

use serde::{Deserialize, Serialize};

/// Fallback width used when no browser window is available (native builds, tests).
pub const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
/// Fallback height used when no browser window is available (native builds, tests).
pub const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// Raw inner size of the hosting browser window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Inner width.
    pub width: i32,
    /// Inner height, including any area the desktop reserves for its taskbar.
    pub height: i32,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self {
            width: FALLBACK_VIEWPORT_WIDTH,
            height: FALLBACK_VIEWPORT_HEIGHT,
        }
    }
}

/// Reads the current browser inner size, falling back to [`ViewportMetrics::default`].
pub fn read_viewport_metrics() -> ViewportMetrics {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
            return ViewportMetrics {
                width: width.max(0),
                height: height.max(0),
            };
        }
    }

    ViewportMetrics::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_report_fallback_metrics() {
        assert_eq!(read_viewport_metrics(), ViewportMetrics::default());
    }
}
