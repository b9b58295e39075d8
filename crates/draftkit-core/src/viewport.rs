//! Viewport width classification for switching to the compact toolbar.

use serde::{Deserialize, Serialize};

/// Widths at or below this are treated as small viewports.
pub const DEFAULT_SMALL_VIEWPORT_WIDTH: f64 = 1025.0;

/// A measured viewport width and whether it counts as small.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportWidth {
    pub width: f64,
    pub is_small: bool,
}

impl ViewportWidth {
    /// Classify `width` against a `max-width` breakpoint (inclusive).
    pub fn classify(width: f64, max_width: f64) -> Self {
        Self {
            width,
            is_small: width <= max_width,
        }
    }

    /// Re-measure, returning true when the small/large classification changed.
    pub fn update(&mut self, width: f64, max_width: f64) -> bool {
        let next = Self::classify(width, max_width);
        let changed = next.is_small != self.is_small;
        if changed {
            log::debug!("Viewport width {} is now {}", width, if next.is_small { "small" } else { "large" });
        }
        *self = next;
        changed
    }
}
