// src/types/rich_text.rs
//! Inline rich text: one span is a contiguous run of text sharing one set
//! of style annotations.

use serde::{Deserialize, Serialize};

/// Style annotations for a rich text span, matching Notion's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "default".to_string()
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: default_color(),
        }
    }
}

/// One inline styled text run.
///
/// Order within a containing block's span sequence is rendering order.
/// Spans whose inline type is not `text` (mentions, equations) carry the
/// API-provided plain-text fallback here, so downstream code never needs
/// to know which inline type produced a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextSpan {
    pub plain_text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

impl RichTextSpan {
    /// Create an unstyled span, the most common variant and the
    /// vocabulary for building rich text in tests and adapters.
    pub fn plain(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            annotations: Annotations::default(),
            href: None,
        }
    }

    /// Create a span with the given annotations.
    pub fn styled(text: &str, annotations: Annotations) -> Self {
        Self {
            plain_text: text.to_string(),
            annotations,
            href: None,
        }
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }
}

/// Concatenates the plain text of a span sequence, dropping all styling.
///
/// This is how a page title is derived from its title property.
pub fn plain_text_of(spans: &[RichTextSpan]) -> String {
    spans.iter().map(|s| s.plain_text.as_str()).collect()
}
