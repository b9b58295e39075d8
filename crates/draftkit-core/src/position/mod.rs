//! Floating element positioning.
//!
//! Places an overlay (selection toolbar, link editor) next to a target
//! rectangle, flipping below the target when it would leave the top of the
//! scroller and clamping against the scroller's right edge. The result is
//! relative to the anchor element so the overlay scrolls with its container.

mod placement;
mod style;

pub use placement::{AboveTarget, BelowTarget, CustomPlacement, Placement};
pub use style::{FloatingStyle, HIDDEN_OFFSET};

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Default gap between the target and the floating element.
pub const VERTICAL_GAP: f64 = 10.0;

/// Default horizontal inset of the floating element.
pub const HORIZONTAL_OFFSET: f64 = 5.0;

/// Something with a bounding box in viewport coordinates.
pub trait Measurable {
    fn bounding_rect(&self) -> Rect;
}

/// The overlay being positioned.
pub trait FloatingElement: Measurable {
    fn apply_style(&mut self, style: &FloatingStyle);
}

/// The element whose origin floating offsets are relative to.
pub trait AnchorElement: Measurable {
    /// Bounding box of the anchor's parent scroller, `None` if detached.
    fn scroller_rect(&self) -> Option<Rect>;
}

impl Measurable for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// Spacing used by a positioning call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    pub vertical_gap: f64,
    pub horizontal_offset: f64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            vertical_gap: VERTICAL_GAP,
            horizontal_offset: HORIZONTAL_OFFSET,
        }
    }
}

impl PositionConfig {
    pub fn new(vertical_gap: f64, horizontal_offset: f64) -> Self {
        Self {
            vertical_gap,
            horizontal_offset,
        }
    }
}

/// Compute the style for a floating element from measured rectangles.
///
/// Returns the hidden style when there is no target or no scroller.
pub fn compute_floating_position(
    target: Option<Rect>,
    floating: Rect,
    anchor: Rect,
    scroller: Option<Rect>,
    config: PositionConfig,
    placement: impl Placement,
) -> FloatingStyle {
    let (Some(target), Some(scroller)) = (target, scroller) else {
        return FloatingStyle::hidden();
    };

    let PositionConfig {
        vertical_gap,
        horizontal_offset,
    } = config;

    let mut top = placement.initial_top(&target, &floating, vertical_gap);
    let mut left = placement.initial_left(&target, &floating, horizontal_offset);

    if top < scroller.y0 {
        top += floating.height() + target.height() + vertical_gap * 2.0;
    }

    if left + floating.width() > scroller.x1 {
        left = scroller.x1 - floating.width() - horizontal_offset;
    }

    top -= anchor.y0;
    left -= anchor.x0;

    FloatingStyle::visible_at(left, top)
}

/// Measure the elements and position `floating` next to `target`.
pub fn set_floating_element_position<F, A>(
    target: Option<Rect>,
    floating: &mut F,
    anchor: &A,
    config: PositionConfig,
    placement: impl Placement,
) -> FloatingStyle
where
    F: FloatingElement + ?Sized,
    A: AnchorElement + ?Sized,
{
    let scroller = anchor.scroller_rect();
    let style = if target.is_none() || scroller.is_none() {
        log::debug!("Hiding floating element (target: {}, scroller: {})", target.is_some(), scroller.is_some());
        FloatingStyle::hidden()
    } else {
        compute_floating_position(
            target,
            floating.bounding_rect(),
            anchor.bounding_rect(),
            scroller,
            config,
            placement,
        )
    };
    log::trace!("Floating element style: {}", style.transform());
    floating.apply_style(&style);
    style
}

/// Position a link editor, which starts at the target's top edge instead of above it.
pub fn set_floating_element_position_for_link_editor<F, A>(
    target: Option<Rect>,
    floating: &mut F,
    anchor: &A,
    config: PositionConfig,
) -> FloatingStyle
where
    F: FloatingElement + ?Sized,
    A: AnchorElement + ?Sized,
{
    set_floating_element_position(target, floating, anchor, config, BelowTarget)
}

/// Park `floating` off-screen.
pub fn hide_floating_element<F: FloatingElement + ?Sized>(floating: &mut F) {
    floating.apply_style(&FloatingStyle::hidden());
}
