//! Drives the positioner the way a selection toolbar does: hide, show,
//! scroll, and hide again.

use draftkit_core::{
    hide_floating_element, selection_shows_toolbar, set_floating_element_position, AboveTarget,
    AnchorElement, FloatingElement, FloatingStyle, Measurable, PositionConfig, Rect,
};

#[derive(Default)]
struct Popup {
    size: (f64, f64),
    opacity: String,
    transform: String,
}

impl Measurable for Popup {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.0, self.size.1)
    }
}

impl FloatingElement for Popup {
    fn apply_style(&mut self, style: &FloatingStyle) {
        self.opacity = style.opacity().to_string();
        self.transform = style.transform();
    }
}

/// An anchor inside a scroller that has been scrolled by `scroll_y`.
struct ScrolledAnchor {
    scroll_y: f64,
}

impl Measurable for ScrolledAnchor {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 100.0 - self.scroll_y, 800.0, 2100.0 - self.scroll_y)
    }
}

impl AnchorElement for ScrolledAnchor {
    fn scroller_rect(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 100.0, 800.0, 700.0))
    }
}

fn update(popup: &mut Popup, anchor: &ScrolledAnchor, selection: Option<(&str, Rect)>) {
    match selection {
        Some((text, rect)) if selection_shows_toolbar(true, false, text) => {
            set_floating_element_position(Some(rect), popup, anchor, PositionConfig::default(), AboveTarget);
        }
        _ => hide_floating_element(popup),
    }
}

#[test]
fn test_toolbar_lifecycle() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut popup = Popup {
        size: (200.0, 36.0),
        ..Default::default()
    };
    let mut anchor = ScrolledAnchor { scroll_y: 0.0 };

    update(&mut popup, &anchor, None);
    assert_eq!(popup.opacity, "0");
    assert_eq!(popup.transform, "translate(-10000px, -10000px)");

    // Selection well inside the scroller: above the text.
    let selection = Rect::new(300.0, 400.0, 360.0, 418.0);
    update(&mut popup, &anchor, Some(("word", selection)));
    assert_eq!(popup.opacity, "1");
    // top = 400 - 36 - 10 - 100, left = 295 - 0
    assert_eq!(popup.transform, "translate(295px, 254px)");

    // After scrolling, the same text sits near the scroller's top edge, so the
    // toolbar flips below it. Offsets stay anchor-relative.
    anchor.scroll_y = 280.0;
    let scrolled = Rect::new(300.0, 120.0, 360.0, 138.0);
    update(&mut popup, &anchor, Some(("word", scrolled)));
    // top = 120 - 46 = 74 < 100, flipped to 74 + 36 + 18 + 20 = 148, minus anchor top -180
    assert_eq!(popup.transform, "translate(295px, 328px)");

    // Whitespace-only selections close the toolbar.
    update(&mut popup, &anchor, Some(("\n  ", scrolled)));
    assert_eq!(popup.opacity, "0");
}

#[test]
fn test_toolbar_clamps_at_right_edge() {
    let mut popup = Popup {
        size: (200.0, 36.0),
        ..Default::default()
    };
    let anchor = ScrolledAnchor { scroll_y: 0.0 };
    let selection = Rect::new(700.0, 400.0, 760.0, 418.0);
    update(&mut popup, &anchor, Some(("word", selection)));
    // 695 + 200 > 800, clamped to 800 - 200 - 5
    assert_eq!(popup.transform, "translate(595px, 254px)");
}
