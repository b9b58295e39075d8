//! Toolbar buttons and the inline format bar.

use draftkit_core::{ActiveFormats, TextFormat};
use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui};

use crate::{sizing, theme};

/// Short glyph shown on a format button.
pub fn format_glyph(format: TextFormat) -> &'static str {
    match format {
        TextFormat::Bold => "B",
        TextFormat::Italic => "I",
        TextFormat::Underline => "U",
        TextFormat::Strikethrough => "S",
        TextFormat::Code => "</>",
        TextFormat::Superscript => "x²",
        TextFormat::Subscript => "x₂",
    }
}

/// A square toolbar button with a text glyph.
/// Filled with the accent color while active.
pub struct ToolbarButton<'a> {
    label: &'a str,
    tooltip: Option<&'a str>,
    active: bool,
    size: f32,
    font_size: f32,
}

impl<'a> ToolbarButton<'a> {
    /// Create a new toolbar button.
    pub fn new(label: &'a str, active: bool) -> Self {
        Self {
            label,
            tooltip: None,
            active,
            size: sizing::BUTTON,
            font_size: 14.0,
        }
    }

    /// Set the hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.active {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::WHITE
            };
            let text_color = if self.active { Color32::WHITE } else { theme::TEXT };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            if !self.active {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Inside,
                );
            }
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                text_color,
            );
        }

        let clicked = response.clicked();
        let response = match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// One toggle button per format, highlighting the active ones.
pub struct FormatBar<'a> {
    active: &'a ActiveFormats,
    formats: &'a [TextFormat],
}

impl<'a> FormatBar<'a> {
    /// A bar with every format.
    pub fn new(active: &'a ActiveFormats) -> Self {
        Self {
            active,
            formats: &TextFormat::ALL,
        }
    }

    /// Restrict the bar to `formats`, in the given order.
    pub fn formats(mut self, formats: &'a [TextFormat]) -> Self {
        self.formats = formats;
        self
    }

    /// Show the bar and return the format whose button was clicked.
    pub fn show(self, ui: &mut Ui) -> Option<TextFormat> {
        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = vec2(4.0, 0.0);
            for &format in self.formats {
                let button = ToolbarButton::new(format_glyph(format), self.active.is_active(format))
                    .tooltip(format.label());
                if button.show(ui) {
                    log::debug!("Format button clicked: {:?}", format);
                    clicked = Some(format);
                }
            }
        });
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_has_a_glyph() {
        for format in TextFormat::ALL {
            assert!(!format_glyph(format).is_empty());
        }
    }

    #[test]
    fn test_format_bar_without_clicks() {
        let ctx = egui::Context::default();
        let active: ActiveFormats = [TextFormat::Bold].into_iter().collect();
        let mut clicked = Some(TextFormat::Code);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = FormatBar::new(&active)
                    .formats(&[TextFormat::Bold, TextFormat::Italic])
                    .show(ui);
            });
        });
        assert_eq!(clicked, None);
    }
}
