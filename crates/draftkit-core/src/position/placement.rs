//! Initial placement strategies.
//!
//! A strategy only decides where the floating element starts out. Flipping,
//! clamping and the anchor-relative conversion are shared by every strategy.

use kurbo::Rect;

/// Computes the initial viewport position of a floating element.
pub trait Placement {
    /// Initial top edge, before flipping.
    fn initial_top(&self, target: &Rect, floating: &Rect, vertical_gap: f64) -> f64;

    /// Initial left edge, before clamping.
    fn initial_left(&self, target: &Rect, floating: &Rect, horizontal_offset: f64) -> f64;
}

/// Place the floating element above the target (selection toolbar).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AboveTarget;

impl Placement for AboveTarget {
    fn initial_top(&self, target: &Rect, floating: &Rect, vertical_gap: f64) -> f64 {
        target.y0 - floating.height() - vertical_gap
    }

    fn initial_left(&self, target: &Rect, _floating: &Rect, horizontal_offset: f64) -> f64 {
        target.x0 - horizontal_offset
    }
}

/// Start the floating element at the target's top edge (link editor).
///
/// Because the start lies inside the gap above the target, the flip moves it
/// below the target whenever the scroller's top edge is in the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BelowTarget;

impl Placement for BelowTarget {
    fn initial_top(&self, target: &Rect, _floating: &Rect, vertical_gap: f64) -> f64 {
        target.y0 - vertical_gap
    }

    fn initial_left(&self, target: &Rect, _floating: &Rect, horizontal_offset: f64) -> f64 {
        target.x0 - horizontal_offset
    }
}

/// A placement built from two closures.
pub struct CustomPlacement<T, L> {
    top: T,
    left: L,
}

impl<T, L> CustomPlacement<T, L>
where
    T: Fn(&Rect, &Rect, f64) -> f64,
    L: Fn(&Rect, &Rect, f64) -> f64,
{
    pub fn new(top: T, left: L) -> Self {
        Self { top, left }
    }
}

impl<T, L> Placement for CustomPlacement<T, L>
where
    T: Fn(&Rect, &Rect, f64) -> f64,
    L: Fn(&Rect, &Rect, f64) -> f64,
{
    fn initial_top(&self, target: &Rect, floating: &Rect, vertical_gap: f64) -> f64 {
        (self.top)(target, floating, vertical_gap)
    }

    fn initial_left(&self, target: &Rect, floating: &Rect, horizontal_offset: f64) -> f64 {
        (self.left)(target, floating, horizontal_offset)
    }
}

impl<P: Placement + ?Sized> Placement for &P {
    fn initial_top(&self, target: &Rect, floating: &Rect, vertical_gap: f64) -> f64 {
        (**self).initial_top(target, floating, vertical_gap)
    }

    fn initial_left(&self, target: &Rect, floating: &Rect, horizontal_offset: f64) -> f64 {
        (**self).initial_left(target, floating, horizontal_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Rect {
        Rect::new(100.0, 200.0, 180.0, 220.0)
    }

    fn floating() -> Rect {
        Rect::new(0.0, 0.0, 120.0, 40.0)
    }

    #[test]
    fn test_above_target() {
        let p = AboveTarget;
        assert_eq!(p.initial_top(&target(), &floating(), 10.0), 150.0);
        assert_eq!(p.initial_left(&target(), &floating(), 5.0), 95.0);
    }

    #[test]
    fn test_below_target_ignores_floating_height() {
        let p = BelowTarget;
        assert_eq!(p.initial_top(&target(), &floating(), 10.0), 190.0);
        assert_eq!(p.initial_left(&target(), &floating(), 5.0), 95.0);
    }

    #[test]
    fn test_custom_placement() {
        let p = CustomPlacement::new(|t: &Rect, _: &Rect, gap| t.y1 + gap, |t: &Rect, f: &Rect, _| t.x1 - f.width());
        assert_eq!(p.initial_top(&target(), &floating(), 10.0), 230.0);
        assert_eq!(p.initial_left(&target(), &floating(), 5.0), 60.0);
    }

    #[test]
    fn test_dyn_placement() {
        let boxed: Box<dyn Placement> = Box::new(BelowTarget);
        assert_eq!(boxed.initial_top(&target(), &floating(), 10.0), 190.0);
    }
}
