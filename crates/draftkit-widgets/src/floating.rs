//! Floating overlays (selection toolbar, link editor, dropdowns) in egui.
//!
//! egui lays out an area before its size is known, so the floating element is
//! measured from the previous frame's area rect. The first frame after the
//! contents change may be off by the size delta; a repaint is requested then.

use std::hash::Hash;

use draftkit_core::{
    set_floating_element_position, AboveTarget, AnchorElement, BelowTarget, FloatingElement,
    FloatingStyle, Measurable, Placement, PositionConfig,
};
use egui::{Context, Frame, Id, Order, Pos2, Rect, Ui, Vec2};

/// Convert an egui rect to the core's geometry type.
pub fn to_kurbo(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

/// Convert a core rect back to egui.
pub fn from_kurbo(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// A floating egui area, measured from its last laid-out rect.
#[derive(Debug, Clone, Copy)]
pub struct EguiFloating {
    rect: Rect,
    style: FloatingStyle,
}

impl EguiFloating {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            style: FloatingStyle::hidden(),
        }
    }

    pub fn style(&self) -> &FloatingStyle {
        &self.style
    }
}

impl Measurable for EguiFloating {
    fn bounding_rect(&self) -> kurbo::Rect {
        to_kurbo(self.rect)
    }
}

impl FloatingElement for EguiFloating {
    fn apply_style(&mut self, style: &FloatingStyle) {
        self.style = *style;
    }
}

/// The editor content rect that floating offsets are relative to, and the
/// visible scroll area that bounds it.
#[derive(Debug, Clone, Copy)]
pub struct EguiAnchor {
    pub rect: Rect,
    pub scroller: Option<Rect>,
}

impl EguiAnchor {
    pub fn new(rect: Rect, scroller: Rect) -> Self {
        Self {
            rect,
            scroller: Some(scroller),
        }
    }

    /// Screen position of an anchor-relative style.
    pub fn screen_pos(&self, style: &FloatingStyle) -> Pos2 {
        self.rect.min + Vec2::new(style.left() as f32, style.top() as f32)
    }
}

impl Measurable for EguiAnchor {
    fn bounding_rect(&self) -> kurbo::Rect {
        to_kurbo(self.rect)
    }
}

impl AnchorElement for EguiAnchor {
    fn scroller_rect(&self) -> Option<kurbo::Rect> {
        self.scroller.map(to_kurbo)
    }
}

/// Where an overlay starts out relative to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolbarPlacement {
    /// Above the selection (selection toolbar).
    #[default]
    Above,
    /// At the link's top edge (link editor).
    LinkEditor,
    /// Directly under the target (dropdowns opened from a button).
    Dropdown,
}

impl Placement for ToolbarPlacement {
    fn initial_top(&self, target: &kurbo::Rect, floating: &kurbo::Rect, vertical_gap: f64) -> f64 {
        match self {
            ToolbarPlacement::Above => AboveTarget.initial_top(target, floating, vertical_gap),
            ToolbarPlacement::LinkEditor => BelowTarget.initial_top(target, floating, vertical_gap),
            ToolbarPlacement::Dropdown => target.y1 + vertical_gap,
        }
    }

    fn initial_left(&self, target: &kurbo::Rect, floating: &kurbo::Rect, horizontal_offset: f64) -> f64 {
        match self {
            ToolbarPlacement::Above | ToolbarPlacement::Dropdown => {
                AboveTarget.initial_left(target, floating, horizontal_offset)
            }
            ToolbarPlacement::LinkEditor => BelowTarget.initial_left(target, floating, horizontal_offset),
        }
    }
}

/// An overlay positioned next to a target rect every frame.
pub struct FloatingToolbar {
    id: Id,
    placement: ToolbarPlacement,
    config: PositionConfig,
    frame: Frame,
}

impl FloatingToolbar {
    /// Create a floating toolbar with a stable id.
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            placement: ToolbarPlacement::Above,
            config: PositionConfig::default(),
            frame: crate::menu::toolbar_frame(),
        }
    }

    /// Set where the overlay starts relative to its target.
    pub fn placement(mut self, placement: ToolbarPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Use link editor placement.
    pub fn link_editor(self) -> Self {
        self.placement(ToolbarPlacement::LinkEditor)
    }

    /// Use link editor placement inside a panel frame.
    pub fn link_editor_panel(self) -> Self {
        self.link_editor().frame(crate::menu::panel_frame())
    }

    /// Frame drawn around the contents.
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// Override gap and offset.
    pub fn config(mut self, config: PositionConfig) -> Self {
        self.config = config;
        self
    }

    /// Compute the style for this frame without showing anything.
    pub fn layout(&self, ctx: &Context, target: Option<Rect>, anchor: &EguiAnchor) -> FloatingStyle {
        let last_rect = ctx.memory(|mem| mem.area_rect(self.id));
        if target.is_some() && last_rect.is_none() {
            // Not measured yet; lay out once more with the real size.
            ctx.request_repaint();
        }

        let mut floating = EguiFloating::new(last_rect.unwrap_or(Rect::from_min_size(Pos2::ZERO, Vec2::ZERO)));
        set_floating_element_position(
            target.map(to_kurbo),
            &mut floating,
            anchor,
            self.config,
            self.placement,
        )
    }

    /// Show the overlay next to `target`.
    ///
    /// Returns `None` without drawing when there is no target or the anchor
    /// has no scroller.
    pub fn show<R>(
        self,
        ctx: &Context,
        target: Option<Rect>,
        anchor: &EguiAnchor,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> Option<R> {
        let style = self.layout(ctx, target, anchor);
        if !style.visible {
            return None;
        }

        let response = egui::Area::new(self.id)
            .fixed_pos(anchor.screen_pos(&style))
            .order(Order::Foreground)
            .show(ctx, |ui| self.frame.show(ui, add_contents).inner);
        Some(response.inner)
    }
}
