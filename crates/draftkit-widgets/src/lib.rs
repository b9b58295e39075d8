//! egui components for the draftkit editor.
//!
//! - **Floating**: selection toolbar and link editor overlays placed by the core positioner
//! - **Buttons**: toolbar toggle buttons and the inline format bar
//! - **Colors**: color swatches and the color list dropdown
//! - **Menu**: panel and toolbar frames

pub mod buttons;
pub mod colors;
pub mod floating;
pub mod menu;

pub use buttons::{format_glyph, FormatBar, ToolbarButton};
pub use colors::{item_color, ColorListDropdown, ColorSwatch};
pub use floating::{from_kurbo, to_kurbo, EguiAnchor, EguiFloating, FloatingToolbar, ToolbarPlacement};
pub use menu::{panel_frame, toolbar_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Color swatch size
    pub const SWATCH: f32 = 20.0;
    /// Toolbar button size (original toolbar buttons are 35px round)
    pub const BUTTON: f32 = 35.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Active format color (violet)
    pub const ACCENT: Color32 = Color32::from_rgb(111, 110, 119);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 242, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
