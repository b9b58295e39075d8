//! Block types shown in the toolbar's block dropdown, and the slash-command
//! picker that converts the current block.

use serde::{Deserialize, Serialize};

/// The kind of block the selection sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Bullet,
    Check,
    Number,
    Code,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    Quote,
}

impl BlockType {
    /// Headings in level order.
    pub const HEADINGS: [BlockType; 6] = [
        BlockType::H1,
        BlockType::H2,
        BlockType::H3,
        BlockType::H4,
        BlockType::H5,
        BlockType::H6,
    ];

    /// Name shown in the toolbar dropdown.
    pub fn display_name(self) -> &'static str {
        match self {
            BlockType::Bullet => "Bulleted List",
            BlockType::Check => "Check List",
            BlockType::Number => "Numbered List",
            BlockType::Code => "Code Block",
            BlockType::H1 => "Heading 1",
            BlockType::H2 => "Heading 2",
            BlockType::H3 => "Heading 3",
            BlockType::H4 => "Heading 4",
            BlockType::H5 => "Heading 5",
            BlockType::H6 => "Heading 6",
            BlockType::Paragraph => "Normal",
            BlockType::Quote => "Quote",
        }
    }

    /// Parse a block tag such as `h2` or `paragraph`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "bullet" => BlockType::Bullet,
            "check" => BlockType::Check,
            "number" => BlockType::Number,
            "code" => BlockType::Code,
            "h1" => BlockType::H1,
            "h2" => BlockType::H2,
            "h3" => BlockType::H3,
            "h4" => BlockType::H4,
            "h5" => BlockType::H5,
            "h6" => BlockType::H6,
            "paragraph" => BlockType::Paragraph,
            "quote" => BlockType::Quote,
            _ => return None,
        })
    }

    /// Heading level 1-6, if this is a heading.
    pub fn heading_level(self) -> Option<u8> {
        BlockType::HEADINGS
            .iter()
            .position(|h| *h == self)
            .map(|i| i as u8 + 1)
    }
}

/// The root container the selection sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootType {
    #[default]
    Root,
    Table,
}

impl RootType {
    pub fn display_name(self) -> &'static str {
        match self {
            RootType::Root => "Root",
            RootType::Table => "Table",
        }
    }
}

/// Shortcut hint shown next to every block conversion.
pub const BLOCK_SHORTCUT: &str = "⌘+⇧+T";

/// An entry in the slash-command picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub keyboard_shortcut: Option<String>,
    /// Block the selection is converted to when the option is chosen.
    pub block: BlockType,
}

impl PickerOption {
    pub fn new(title: impl Into<String>, block: BlockType) -> Self {
        Self {
            title: title.into(),
            keywords: Vec::new(),
            keyboard_shortcut: None,
            block,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.keyboard_shortcut = Some(shortcut.into());
        self
    }

    /// True when `query` occurs in the title or any keyword, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(&query))
    }
}

/// Paragraph followed by Heading 1 through 6.
pub fn default_picker_options() -> Vec<PickerOption> {
    std::iter::once(PickerOption::new("Paragraph", BlockType::Paragraph))
        .chain(
            BlockType::HEADINGS
                .into_iter()
                .enumerate()
                .map(|(i, block)| PickerOption::new(format!("Heading {}", i + 1), block)),
        )
        .map(|option| option.with_shortcut(BLOCK_SHORTCUT))
        .collect()
}

/// Options matching `query`. A missing or blank query matches everything.
///
/// The query is matched as literal text, not as a pattern.
pub fn filter_options<'a>(options: &'a [PickerOption], query: Option<&str>) -> Vec<&'a PickerOption> {
    match query {
        Some(query) if !query.trim().is_empty() => {
            options.iter().filter(|option| option.matches(query)).collect()
        }
        _ => options.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(options: &[&PickerOption]) -> Vec<String> {
        options.iter().map(|o| o.title.clone()).collect()
    }

    #[test]
    fn test_block_names() {
        assert_eq!(BlockType::Paragraph.display_name(), "Normal");
        assert_eq!(BlockType::Code.display_name(), "Code Block");
        assert_eq!(BlockType::from_tag("h3"), Some(BlockType::H3));
        assert_eq!(BlockType::from_tag("h3").map(BlockType::display_name), Some("Heading 3"));
        assert_eq!(BlockType::from_tag("table"), None);
        assert_eq!(RootType::Table.display_name(), "Table");
        assert_eq!(RootType::default().display_name(), "Root");
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(BlockType::H1.heading_level(), Some(1));
        assert_eq!(BlockType::H6.heading_level(), Some(6));
        assert_eq!(BlockType::Quote.heading_level(), None);
    }

    #[test]
    fn test_default_options() {
        let options = default_picker_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].title, "Paragraph");
        assert_eq!(options[6].title, "Heading 6");
        assert_eq!(options[6].block, BlockType::H6);
        assert!(options.iter().all(|o| o.keyboard_shortcut.as_deref() == Some(BLOCK_SHORTCUT)));
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let options = default_picker_options();
        assert_eq!(filter_options(&options, None).len(), 7);
        assert_eq!(filter_options(&options, Some("")).len(), 7);
        assert_eq!(filter_options(&options, Some("   ")).len(), 7);
    }

    #[test]
    fn test_title_match_ignores_case() {
        let options = default_picker_options();
        assert_eq!(titles(&filter_options(&options, Some("para"))), vec!["Paragraph"]);
        assert_eq!(filter_options(&options, Some("HEADING")).len(), 6);
        assert_eq!(titles(&filter_options(&options, Some("g 2"))), vec!["Heading 2"]);
        assert!(filter_options(&options, Some("table")).is_empty());
    }

    #[test]
    fn test_keyword_only_match() {
        let options = vec![
            PickerOption::new("Paragraph", BlockType::Paragraph).with_keywords(["normal", "text"]),
            PickerOption::new("Quote", BlockType::Quote).with_keywords(["blockquote"]),
        ];
        assert_eq!(titles(&filter_options(&options, Some("Text"))), vec!["Paragraph"]);
        assert_eq!(titles(&filter_options(&options, Some("block"))), vec!["Quote"]);
    }

    #[test]
    fn test_query_is_literal() {
        let options = vec![PickerOption::new("C++ snippet", BlockType::Code)];
        assert_eq!(filter_options(&options, Some("c++")).len(), 1);
        assert!(filter_options(&options, Some("c.*")).is_empty());
    }

    #[test]
    fn test_options_from_json() {
        let options: Vec<PickerOption> =
            serde_json::from_str(r#"[{"title": "Quote", "keywords": ["cite"], "block": "quote"}]"#).unwrap();
        assert_eq!(options[0].block, BlockType::Quote);
        assert_eq!(filter_options(&options, Some("CITE")).len(), 1);
    }
}
