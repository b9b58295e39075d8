//! Color swatches and the color list dropdown.

use draftkit_core::ColorItem;
use egui::{vec2, Color32, Context, CursorIcon, Rect, Sense, Stroke, Ui};

use crate::floating::{EguiAnchor, FloatingToolbar, ToolbarPlacement};
use crate::{sizing, theme};

const FALLBACK_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// The egui color for a color item, gray if its value does not parse.
pub fn item_color(item: &ColorItem) -> Color32 {
    match item.rgb() {
        Ok([r, g, b]) => Color32::from_rgb(r, g, b),
        Err(err) => {
            log::warn!("Color item {:?}: {}", item.label, err);
            FALLBACK_COLOR
        }
    }
}

/// A clickable circular color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: f32,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: sizing::SWATCH,
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            ui.painter().circle_filled(center, radius, self.color);
            if self.selected {
                // Inner offset ring
                ui.painter()
                    .circle_stroke(center, radius - 3.0, Stroke::new(2.0, Color32::WHITE));
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// A labelled list of color swatches, one row per item.
pub struct ColorListDropdown<'a> {
    items: &'a [ColorItem],
    current: Option<&'a str>,
    title: &'a str,
}

impl<'a> ColorListDropdown<'a> {
    /// Create a dropdown over `items`.
    pub fn new(items: &'a [ColorItem], title: &'a str) -> Self {
        Self {
            items,
            current: None,
            title,
        }
    }

    /// Mark the item whose value equals `value` as selected.
    pub fn current(mut self, value: Option<&'a str>) -> Self {
        self.current = value;
        self
    }

    /// Show the list and return the clicked item.
    pub fn show(self, ui: &mut Ui) -> Option<&'a ColorItem> {
        let mut selected = None;
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = vec2(0.0, 4.0);
            ui.label(egui::RichText::new(self.title).size(12.0).color(theme::TEXT_MUTED));

            for item in self.items {
                let is_selected = self
                    .current
                    .is_some_and(|value| value.eq_ignore_ascii_case(&item.value));
                ui.horizontal(|ui| {
                    let (clicked, _) = ColorSwatch::new(item_color(item), &item.label)
                        .selected(is_selected)
                        .show(ui);
                    let label = ui.add(
                        egui::Label::new(egui::RichText::new(&*item.label).color(theme::TEXT))
                            .sense(Sense::click()),
                    );
                    if clicked || label.clicked() {
                        selected = Some(item);
                    }
                });
            }
        });
        selected
    }

    /// Show the list in a panel under `button`, the toolbar button that opened it.
    ///
    /// Returns `None` when the popup cannot be placed, `Some(None)` while open
    /// with nothing clicked.
    pub fn show_popup(
        self,
        ctx: &Context,
        button: Rect,
        anchor: &EguiAnchor,
    ) -> Option<Option<&'a ColorItem>> {
        FloatingToolbar::new(("color_list_dropdown", self.title))
            .placement(ToolbarPlacement::Dropdown)
            .frame(crate::menu::panel_frame())
            .show(ctx, Some(button), anchor, |ui| self.show(ui))
    }
}
