//! Inline text formatting state shown by the toolbars.

use serde::{Deserialize, Serialize};

/// An inline format that can be toggled on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Superscript,
    Subscript,
}

impl TextFormat {
    /// All formats, in toolbar order.
    pub const ALL: [TextFormat; 7] = [
        TextFormat::Bold,
        TextFormat::Italic,
        TextFormat::Underline,
        TextFormat::Strikethrough,
        TextFormat::Code,
        TextFormat::Superscript,
        TextFormat::Subscript,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextFormat::Bold => "Bold",
            TextFormat::Italic => "Italic",
            TextFormat::Underline => "Underline",
            TextFormat::Strikethrough => "Strikethrough",
            TextFormat::Code => "Code",
            TextFormat::Superscript => "Superscript",
            TextFormat::Subscript => "Subscript",
        }
    }

    /// Lowercase key, as used in serialized state.
    pub fn key(self) -> &'static str {
        match self {
            TextFormat::Bold => "bold",
            TextFormat::Italic => "italic",
            TextFormat::Underline => "underline",
            TextFormat::Strikethrough => "strikethrough",
            TextFormat::Code => "code",
            TextFormat::Superscript => "superscript",
            TextFormat::Subscript => "subscript",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Which formats are active on the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFormats {
    bits: u8,
    /// Selection is inside a link.
    pub is_link: bool,
    /// Selection is a text range.
    pub is_text: bool,
}

impl ActiveFormats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, format: TextFormat) -> bool {
        self.bits & format.bit() != 0
    }

    pub fn set(&mut self, format: TextFormat, active: bool) {
        if active {
            self.bits |= format.bit();
        } else {
            self.bits &= !format.bit();
        }
    }

    /// Flip a format, returning its new state.
    pub fn toggle(&mut self, format: TextFormat) -> bool {
        let active = !self.is_active(format);
        self.set(format, active);
        active
    }

    /// Active formats in toolbar order. `is_text` and `is_link` describe the
    /// selection rather than a format, so they are left out; see [`Self::active_keys`].
    pub fn active_list(&self) -> Vec<TextFormat> {
        TextFormat::ALL
            .into_iter()
            .filter(|f| self.is_active(*f))
            .collect()
    }

    /// Lowercase keys of every set flag: `text`, then the formats in toolbar
    /// order, then `link`.
    pub fn active_keys(&self) -> Vec<&'static str> {
        let formats = self.active_list().into_iter().map(TextFormat::key);
        self.is_text
            .then_some("text")
            .into_iter()
            .chain(formats)
            .chain(self.is_link.then_some("link"))
            .collect()
    }

    /// Clears the formats; `is_text` and `is_link` are kept.
    pub fn clear(&mut self) {
        self.bits = 0;
    }
}

impl FromIterator<TextFormat> for ActiveFormats {
    fn from_iter<I: IntoIterator<Item = TextFormat>>(iter: I) -> Self {
        let mut formats = Self::new();
        for f in iter {
            formats.set(f, true);
        }
        formats
    }
}

/// Whether a selection should bring up the floating toolbar.
///
/// Only non-collapsed range selections with visible text qualify; line
/// breaks and surrounding whitespace do not count as text.
pub fn selection_shows_toolbar(is_range: bool, is_collapsed: bool, text: &str) -> bool {
    if !is_range || is_collapsed {
        return false;
    }
    let text: String = text.chars().filter(|c| *c != '\n').collect();
    !text.trim().is_empty()
}
