//! Class-name namespacing.
//!
//! Components tag their containers with class names such as `editor-view`.
//! Embedders pick a prefix so those names cannot collide with their own CSS.

use serde::{Deserialize, Serialize};

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Prefix a single class name.
///
/// A missing prefix is treated as empty, and an empty prefix never adds a
/// separator. Names that already carry the prefix are returned unchanged.
pub fn prefix_class_name(class_name: &str, prefix: Option<&str>, separator: Option<&str>) -> String {
    let prefix = prefix.unwrap_or("");
    let separator = if prefix.is_empty() {
        ""
    } else {
        separator.unwrap_or(DEFAULT_SEPARATOR)
    };

    let mut head = String::with_capacity(prefix.len() + separator.len());
    head.push_str(prefix);
    head.push_str(separator);

    if class_name.starts_with(&head) {
        class_name.to_string()
    } else {
        head + class_name
    }
}

/// Prefix every whitespace-separated class name in `class_names`.
///
/// Empty tokens are dropped and the result is joined with single spaces.
pub fn prefix_class_names(class_names: &str, prefix: Option<&str>, separator: Option<&str>) -> String {
    class_names
        .split_whitespace()
        .map(|name| prefix_class_name(name, prefix, separator))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join the non-empty parts with single spaces.
pub fn class_names<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A configured prefix/separator pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassPrefix {
    pub prefix: Option<String>,
    pub separator: String,
}

impl Default for ClassPrefix {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ClassPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Default::default()
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn apply(&self, class_names: &str) -> String {
        prefix_class_names(class_names, self.prefix.as_deref(), Some(&self.separator))
    }
}
