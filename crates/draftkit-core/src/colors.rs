//! Default text and highlight colors offered by the color dropdown.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Expected 3 or 6 hex digits: {0}")]
    InvalidLength(String),
    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// A labelled CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorItem {
    pub label: Cow<'static, str>,
    pub value: Cow<'static, str>,
}

impl ColorItem {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            value: Cow::Borrowed(value),
        }
    }

    /// RGB components of the color value.
    pub fn rgb(&self) -> Result<[u8; 3], ColorError> {
        parse_hex_color(&self.value)
    }
}

pub const DEFAULT_COLOR_ITEMS: &[ColorItem] = &[
    ColorItem::new("Gray", "#6b7280"),
    ColorItem::new("Stone", "#78716c"),
    ColorItem::new("Red", "#ef4444"),
    ColorItem::new("Orange", "#f97316"),
    ColorItem::new("Amber", "#f59e0b"),
    ColorItem::new("Yellow", "#ecc94b"),
    ColorItem::new("Green", "#4ade80"),
    ColorItem::new("Teal", "#14b8a6"),
    ColorItem::new("Purple", "#a855f7"),
    ColorItem::new("Pink", "#ec4899"),
];

/// Look up a color by label, ignoring case.
pub fn find_color<'a>(items: &'a [ColorItem], label: &str) -> Option<&'a ColorItem> {
    items.iter().find(|item| item.label.eq_ignore_ascii_case(label))
}

/// Parse `#rrggbb` or `#rgb` into RGB components.
pub fn parse_hex_color(color: &str) -> Result<[u8; 3], ColorError> {
    let digits = color
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(color.to_string()))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(color.to_string()));
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidDigit(color.to_string()));

    match digits.len() {
        6 => Ok([channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?]),
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = channel(&c.to_string())?;
                rgb[i] = v * 16 + v;
            }
            Ok(rgb)
        }
        _ => Err(ColorError::InvalidLength(color.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        assert_eq!(DEFAULT_COLOR_ITEMS.len(), 10);
        assert_eq!(DEFAULT_COLOR_ITEMS[0].label, "Gray");
        for item in DEFAULT_COLOR_ITEMS {
            assert!(item.rgb().is_ok(), "{} should parse", item.value);
        }
    }

    #[test]
    fn test_parse_long_and_short() {
        assert_eq!(parse_hex_color("#ef4444"), Ok([0xef, 0x44, 0x44]));
        assert_eq!(parse_hex_color("#FFF"), Ok([255, 255, 255]));
        assert_eq!(parse_hex_color(" #0a0 "), Ok([0, 0xaa, 0]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_hex_color("ef4444"), Err(ColorError::MissingHash(_))));
        assert!(matches!(parse_hex_color("#ef44"), Err(ColorError::InvalidLength(_))));
        assert!(matches!(parse_hex_color("#gg4444"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(parse_hex_color("#é12"), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_find_color() {
        let teal = find_color(DEFAULT_COLOR_ITEMS, "teal").unwrap();
        assert_eq!(teal.value, "#14b8a6");
        assert!(find_color(DEFAULT_COLOR_ITEMS, "Chartreuse").is_none());
    }

    #[test]
    fn test_custom_items_from_json() {
        let items: Vec<ColorItem> =
            serde_json::from_str(r##"[{"label": "Ink", "value": "#111827"}]"##).unwrap();
        assert_eq!(items[0].rgb(), Ok([0x11, 0x18, 0x27]));
    }
}
