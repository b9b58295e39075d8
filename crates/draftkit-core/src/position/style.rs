//! Style produced by a positioning call.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Offset used to park a hidden floating element off-screen.
pub const HIDDEN_OFFSET: f64 = -10000.0;

/// Anything translated further left or up than this counts as off-screen.
const OFFSCREEN_THRESHOLD: f64 = -5000.0;

/// Placement of a floating element relative to its anchor.
///
/// Visibility is an explicit flag. The CSS-facing accessors still render the
/// historical `opacity`/`transform` pair, so a hidden style renders as
/// opacity `"0"` and `translate(-10000px, -10000px)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatingStyle {
    /// Whether the element should be shown.
    pub visible: bool,
    /// Anchor-relative translation in pixels.
    pub translate: Vec2,
}

impl Default for FloatingStyle {
    fn default() -> Self {
        Self::hidden()
    }
}

impl FloatingStyle {
    /// The canonical hidden state.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            translate: Vec2::new(HIDDEN_OFFSET, HIDDEN_OFFSET),
        }
    }

    /// A visible style translated by (`left`, `top`).
    pub fn visible_at(left: f64, top: f64) -> Self {
        Self {
            visible: true,
            translate: Vec2::new(left, top),
        }
    }

    pub fn left(&self) -> f64 {
        self.translate.x
    }

    pub fn top(&self) -> f64 {
        self.translate.y
    }

    /// Numeric opacity, 0.0 or 1.0.
    pub fn opacity_value(&self) -> f32 {
        if self.visible { 1.0 } else { 0.0 }
    }

    /// CSS `opacity` value.
    pub fn opacity(&self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }

    /// CSS `transform` value, e.g. `translate(95px, 40.5px)`.
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px)",
            css_number(self.translate.x),
            css_number(self.translate.y)
        )
    }

    /// True for the hidden state, or any transparent style parked far off-screen.
    pub fn is_hidden(&self) -> bool {
        !self.visible
            && (self.translate.x <= OFFSCREEN_THRESHOLD || self.translate.y <= OFFSCREEN_THRESHOLD)
    }
}

/// Format a number the way JS `Number#toString` does: shortest round-trip
/// digits, plain decimal for 1e-6 <= |v| < 1e21, exponent form otherwise.
fn css_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Also covers -0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    // `{:e}` prints `1e21` / `1.5e-7`; JS signs positive exponents.
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => exp,
    }
}
