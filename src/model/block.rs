// src/model/block.rs
use crate::types::{BlockId, RichTextSpan};
use serde::{Deserialize, Serialize};

/// Fields every block carries regardless of type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self { id }
    }
}

impl Default for BlockCommon {
    fn default() -> Self {
        Self {
            id: BlockId::new_v4(),
        }
    }
}

/// Payload shared by every plain text-bearing block type.
///
/// Paragraphs, headings and list items all carry the same thing on the
/// wire: an ordered span sequence. Which markdown shape it becomes is
/// decided by the enum variant wrapping it, not by the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TextBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextSpan>,
}

impl TextBlock {
    pub fn new(common: BlockCommon, rich_text: Vec<RichTextSpan>) -> Self {
        Self { common, rich_text }
    }
}

/// A fenced code block: spans plus the language tag Notion stores with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub language: String,
    pub rich_text: Vec<RichTextSpan>,
}

/// A block type outside the supported set.
///
/// Decodes successfully (type recorded, no payload) so that one
/// unrecognized block never loses the rest of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}

/// One content unit of a page body.
///
/// A true tagged variant: the payload a block carries is selected by its
/// constructor, so "at most one payload populated" holds structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    Code(CodeBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        &self.common().id
    }

    fn common(&self) -> &BlockCommon {
        match self {
            Block::Paragraph(b)
            | Block::Heading1(b)
            | Block::Heading2(b)
            | Block::Heading3(b)
            | Block::BulletedListItem(b)
            | Block::NumberedListItem(b) => &b.common,
            Block::Code(b) => &b.common,
            Block::Unsupported(b) => &b.common,
        }
    }

    /// The wire name of the block's type.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::Code(_) => "code",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// The block's span sequence. Unsupported blocks have none.
    pub fn rich_text(&self) -> Option<&[RichTextSpan]> {
        match self {
            Block::Paragraph(b)
            | Block::Heading1(b)
            | Block::Heading2(b)
            | Block::Heading3(b)
            | Block::BulletedListItem(b)
            | Block::NumberedListItem(b) => Some(&b.rich_text),
            Block::Code(b) => Some(&b.rich_text),
            Block::Unsupported(_) => None,
        }
    }
}
