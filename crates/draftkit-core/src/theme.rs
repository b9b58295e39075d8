//! Editor theme: class names applied to the editor's containers.

use crate::classnames::{class_names, prefix_class_names};
use crate::formatting::TextFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme loading errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Containers that carry a prefixed base class plus theme classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerSlot {
    /// The whole editor.
    Editor,
    /// Wraps the editor view.
    Shell,
    /// Scrollable area around the view; floating elements clamp to it.
    Scroller,
    View,
    Input,
    Toolbar,
    /// Wraps the empty-editor placeholder.
    PlaceholderContainer,
    PlaceholderText,
    /// Secondary hint under the placeholder text.
    PlaceholderTip,
}

impl ContainerSlot {
    pub fn base_class(self) -> &'static str {
        match self {
            ContainerSlot::Editor => "editor",
            ContainerSlot::Shell => "editor-shell",
            ContainerSlot::Scroller => "editor-scroller",
            ContainerSlot::View => "editor-view",
            ContainerSlot::Input => "editor-input",
            ContainerSlot::Toolbar => "toolbar-container",
            ContainerSlot::PlaceholderContainer => "editor-placeholder",
            ContainerSlot::PlaceholderText => "editor-placeholder-text",
            ContainerSlot::PlaceholderTip => "editor-placeholder-tip",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerTheme {
    pub editor: Option<String>,
    pub shell: Option<String>,
    pub scroller: Option<String>,
    pub view: Option<String>,
    pub input: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderTheme {
    pub container: Option<String>,
    pub text: Option<String>,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarTheme {
    pub container: Option<String>,
}

/// Classes applied to formatted text runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextTheme {
    pub bold: Option<String>,
    pub italic: Option<String>,
    pub underline: Option<String>,
    pub strikethrough: Option<String>,
    /// Used instead of `underline` plus `strikethrough` when both are active.
    pub underline_strikethrough: Option<String>,
    pub code: Option<String>,
    pub superscript: Option<String>,
    pub subscript: Option<String>,
}

impl TextTheme {
    pub fn format_class(&self, format: TextFormat) -> Option<&str> {
        match format {
            TextFormat::Bold => self.bold.as_deref(),
            TextFormat::Italic => self.italic.as_deref(),
            TextFormat::Underline => self.underline.as_deref(),
            TextFormat::Strikethrough => self.strikethrough.as_deref(),
            TextFormat::Code => self.code.as_deref(),
            TextFormat::Superscript => self.superscript.as_deref(),
            TextFormat::Subscript => self.subscript.as_deref(),
        }
    }
}

/// Class names for the editor's containers.
///
/// Every field is optional so a theme file only lists what it overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorTheme {
    /// Prefix for the built-in base classes.
    pub prefix: Option<String>,
    pub container: ContainerTheme,
    pub placeholder: PlaceholderTheme,
    pub toolbar: ToolbarTheme,
    pub text: TextTheme,
}

impl EditorTheme {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Theme classes configured for `slot`, if any.
    pub fn slot_classes(&self, slot: ContainerSlot) -> Option<&str> {
        match slot {
            ContainerSlot::Editor => self.container.editor.as_deref(),
            ContainerSlot::Shell => self.container.shell.as_deref(),
            ContainerSlot::Scroller => self.container.scroller.as_deref(),
            ContainerSlot::View => self.container.view.as_deref(),
            ContainerSlot::Input => self.container.input.as_deref(),
            ContainerSlot::Toolbar => self.toolbar.container.as_deref(),
            ContainerSlot::PlaceholderContainer => self.placeholder.container.as_deref(),
            ContainerSlot::PlaceholderText => self.placeholder.text.as_deref(),
            ContainerSlot::PlaceholderTip => self.placeholder.tip.as_deref(),
        }
    }

    /// Theme class for a single text format, if any.
    pub fn format_class(&self, format: TextFormat) -> Option<&str> {
        self.text.format_class(format)
    }

    /// Classes for a text run with every format in `formats` applied.
    pub fn text_classes(&self, formats: &[TextFormat]) -> String {
        let underline = formats.contains(&TextFormat::Underline);
        let strikethrough = formats.contains(&TextFormat::Strikethrough);
        let combined = match self.text.underline_strikethrough.as_deref() {
            Some(classes) if underline && strikethrough => Some(classes),
            _ => None,
        };

        let single = formats.iter().map(|&format| match format {
            TextFormat::Underline | TextFormat::Strikethrough if combined.is_some() => None,
            _ => self.format_class(format),
        });
        class_names(single.chain(std::iter::once(combined)))
    }

    /// The full class list for `slot`: prefixed base class, then theme classes.
    pub fn classes_for(&self, slot: ContainerSlot) -> String {
        let base = prefix_class_names(slot.base_class(), self.prefix.as_deref(), None);
        class_names([Some(base.as_str()), self.slot_classes(slot)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_uses_base_classes() {
        let theme = EditorTheme::default();
        assert_eq!(theme.classes_for(ContainerSlot::View), "editor-view");
        assert_eq!(theme.classes_for(ContainerSlot::Toolbar), "toolbar-container");
    }

    #[test]
    fn test_prefixed_theme() {
        let mut theme = EditorTheme::default().with_prefix("dk");
        theme.container.scroller = Some("flex flex-col  overflow-hidden".to_string());
        assert_eq!(
            theme.classes_for(ContainerSlot::Scroller),
            "dk-editor-scroller flex flex-col overflow-hidden"
        );
        assert_eq!(theme.classes_for(ContainerSlot::Editor), "dk-editor");
    }

    #[test]
    fn test_from_json_partial() {
        let theme = EditorTheme::from_json(
            r#"{"prefix": "app", "toolbar": {"container": "bg-slate-100 flex"}}"#,
        )
        .unwrap();
        assert_eq!(theme.prefix.as_deref(), Some("app"));
        assert_eq!(theme.container, ContainerTheme::default());
        assert_eq!(
            theme.classes_for(ContainerSlot::Toolbar),
            "app-toolbar-container bg-slate-100 flex"
        );
    }

    #[test]
    fn test_placeholder_slots() {
        let theme = EditorTheme::from_json(
            r#"{"prefix": "dk", "placeholder": {"container": "overflow-hidden select-none", "tip": "text-xs"}}"#,
        )
        .unwrap();
        assert_eq!(
            theme.classes_for(ContainerSlot::PlaceholderContainer),
            "dk-editor-placeholder overflow-hidden select-none"
        );
        assert_eq!(theme.classes_for(ContainerSlot::PlaceholderText), "dk-editor-placeholder-text");
        assert_eq!(theme.classes_for(ContainerSlot::PlaceholderTip), "dk-editor-placeholder-tip text-xs");
        assert_eq!(theme.slot_classes(ContainerSlot::PlaceholderText), None);
    }

    #[test]
    fn test_text_format_classes() {
        let theme = EditorTheme::from_json(
            r#"{"text": {"bold": "font-bold", "italic": "italic", "underline": "underline",
                "strikethrough": "line-through", "underlineStrikethrough": "underline line-through"}}"#,
        )
        .unwrap();
        assert_eq!(theme.format_class(TextFormat::Bold), Some("font-bold"));
        assert_eq!(theme.format_class(TextFormat::Code), None);
        assert_eq!(
            theme.text.underline_strikethrough.as_deref(),
            Some("underline line-through")
        );
        assert_eq!(theme.text_classes(&[TextFormat::Bold, TextFormat::Italic]), "font-bold italic");
        assert_eq!(
            theme.text_classes(&[TextFormat::Underline, TextFormat::Bold, TextFormat::Strikethrough]),
            "font-bold underline line-through"
        );
        assert_eq!(theme.text_classes(&[TextFormat::Strikethrough]), "line-through");
        assert_eq!(theme.text_classes(&[TextFormat::Code]), "");
    }

    #[test]
    fn test_from_json_error() {
        let err = EditorTheme::from_json("{prefix: }").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid theme JSON"));
    }
}
