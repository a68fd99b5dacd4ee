// src/render/mod.rs
//! Markdown rendering: converts a decoded block sequence to one string.
//!
//! Rendering is pure, deterministic and total: unrecognized block types
//! and empty span lists contribute nothing, never an error, so one bad
//! block cannot abort the rest of a page.

use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::Block;
use crate::types::RichTextSpan;

/// Renders an ordered block sequence into markdown.
///
/// Paragraphs and headings terminate with a blank line, list items with a
/// single newline. Numbered items all render as `1. `, a flat
/// renumbering policy where the display layer owns any visible counter.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);

    for block in blocks {
        match block {
            Block::Paragraph(b) => push_block(&mut output, "", &b.rich_text, "\n\n"),
            Block::Heading1(b) => push_block(&mut output, "# ", &b.rich_text, "\n\n"),
            Block::Heading2(b) => push_block(&mut output, "## ", &b.rich_text, "\n\n"),
            Block::Heading3(b) => push_block(&mut output, "### ", &b.rich_text, "\n\n"),
            Block::BulletedListItem(b) => push_block(&mut output, "- ", &b.rich_text, "\n"),
            Block::NumberedListItem(b) => push_block(&mut output, "1. ", &b.rich_text, "\n"),
            Block::Code(b) => push_code(&mut output, &b.language, &b.rich_text),
            Block::Unsupported(b) => {
                log::debug!("skipping unsupported block type `{}`", b.block_type);
            }
        }
    }

    output
}

fn push_block(output: &mut String, prefix: &str, spans: &[RichTextSpan], terminator: &str) {
    let body = render_spans(spans);
    if body.is_empty() {
        return;
    }
    output.push_str(prefix);
    output.push_str(&body);
    output.push_str(terminator);
}

fn push_code(output: &mut String, language: &str, spans: &[RichTextSpan]) {
    let body = render_spans(spans);
    if body.is_empty() {
        return;
    }
    output.push_str("```");
    output.push_str(language);
    output.push('\n');
    output.push_str(&body);
    output.push_str("\n```\n\n");
}

/// Renders a span sequence, concatenating with no separator; any
/// author-intended whitespace lives inside the span text itself.
pub fn render_spans(spans: &[RichTextSpan]) -> String {
    spans.iter().map(render_span).collect()
}

/// Applies markdown markers by wrapping the running text in a fixed
/// order: bold, italic, strikethrough, inline code, then the hyperlink.
///
/// The order is a contract: applying code after bold/italic keeps their
/// delimiters inside the backtick span, and the link always wraps the
/// fully styled text.
fn render_span(span: &RichTextSpan) -> String {
    let mut text = span.plain_text.clone();

    if span.annotations.bold {
        text = format!("**{}**", text);
    }
    if span.annotations.italic {
        text = format!("*{}*", text);
    }
    if span.annotations.strikethrough {
        text = format!("~~{}~~", text);
    }
    if span.annotations.code {
        text = format!("`{}`", text);
    }
    if let Some(href) = &span.href {
        text = format!("[{}]({})", text, href);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Annotations;

    #[test]
    fn bold_italic_nesting_order() {
        let span = RichTextSpan::styled(
            "x",
            Annotations {
                bold: true,
                italic: true,
                ..Default::default()
            },
        );
        assert_eq!(render_span(&span), "***x***");
    }

    #[test]
    fn code_wraps_outside_bold() {
        let span = RichTextSpan::styled(
            "x",
            Annotations {
                bold: true,
                code: true,
                ..Default::default()
            },
        );
        assert_eq!(render_span(&span), "`**x**`");
    }

    #[test]
    fn link_wraps_the_styled_text_last() {
        let span = RichTextSpan::styled(
            "docs",
            Annotations {
                italic: true,
                ..Default::default()
            },
        )
        .with_href("https://example.com");
        assert_eq!(render_span(&span), "[*docs*](https://example.com)");
    }

    #[test]
    fn spans_concatenate_without_separator() {
        let spans = vec![RichTextSpan::plain("a"), RichTextSpan::plain("b")];
        assert_eq!(render_spans(&spans), "ab");
    }
}
