//! Frames for floating panels and toolbars.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

/// Frame for popups opened from the toolbar: the color list dropdown and
/// the link editor. Roomier than [`toolbar_frame`] and drawn on white.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 1,
            blur: 12,
            offset: [0, 4],
            color: Color32::from_black_alpha(20),
        })
        .inner_margin(Margin::symmetric(10, 8))
}

/// Frame for the floating selection toolbar.
pub fn toolbar_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 10,
            offset: [0, 2],
            color: Color32::from_black_alpha(18),
        })
        .inner_margin(Margin::symmetric(8, 6))
}
