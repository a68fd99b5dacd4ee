// src/model/decode.rs
//! Two-phase decoding of Notion's polymorphic JSON.
//!
//! Notion encodes variants as a `type` discriminant plus one sibling field
//! named after it. Decoding therefore peeks at the discriminant first and
//! decodes only the matching payload; fields absent for non-applicable
//! types are not errors. A single unconditional pass over all fields would
//! reject perfectly valid responses.

use super::block::{Block, BlockCommon, CodeBlock, TextBlock, UnsupportedBlock};
use super::page::{Page, PropertyValue, QueryPage, SelectOption};
use crate::error::DecodeError;
use crate::types::{Annotations, BlockId, PageId, RichTextSpan};
use indexmap::IndexMap;
use serde_json::Value;

/// Decodes a database-query response body into one page of results.
pub fn decode_query_page(value: &Value) -> Result<QueryPage, DecodeError> {
    let (results, results_path) = required(value, "results", "$")?;
    let entries = expect_array(results, &results_path)?;

    let mut pages = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        pages.push(decode_page(entry, &format!("{}[{}]", results_path, i))?);
    }

    let next_cursor = match value.get("next_cursor") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(DecodeError::shape(
                "$.next_cursor",
                "string or null",
                kind(other),
            ))
        }
    };

    let (has_more, has_more_path) = required(value, "has_more", "$")?;
    let has_more = expect_bool(has_more, &has_more_path)?;

    Ok(QueryPage {
        results: pages,
        next_cursor,
        has_more,
    })
}

/// Decodes a block-children response body into an ordered block sequence.
pub fn decode_block_list(value: &Value) -> Result<Vec<Block>, DecodeError> {
    let (results, results_path) = required(value, "results", "$")?;
    let entries = expect_array(results, &results_path)?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| decode_block(entry, &format!("{}[{}]", results_path, i)))
        .collect()
}

/// Decodes one database row.
pub fn decode_page(value: &Value, path: &str) -> Result<Page, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::shape(path, "object", kind(value)));
    }

    let (id, id_path) = required(value, "id", path)?;
    let id = PageId::from_api(expect_str(id, &id_path)?.to_string());

    let (props, props_path) = required(value, "properties", path)?;
    let props = expect_object(props, &props_path)?;

    let mut properties = IndexMap::with_capacity(props.len());
    for (name, prop) in props {
        let prop_path = format!("{}.{}", props_path, name);
        properties.insert(name.clone(), decode_property(prop, &prop_path)?);
    }

    Ok(Page { id, properties })
}

/// Decodes one property value by its `type` discriminant.
///
/// An unrecognized discriminant is a decode failure, never a silently
/// dropped value.
fn decode_property(value: &Value, path: &str) -> Result<PropertyValue, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::shape(path, "object", kind(value)));
    }

    let (discriminant, type_path) = required(value, "type", path)?;
    let discriminant = expect_str(discriminant, &type_path)?;

    match discriminant {
        "title" => {
            let (payload, payload_path) = required(value, "title", path)?;
            Ok(PropertyValue::Title(decode_spans(payload, &payload_path)?))
        }
        "rich_text" => {
            let (payload, payload_path) = required(value, "rich_text", path)?;
            Ok(PropertyValue::RichText(decode_spans(payload, &payload_path)?))
        }
        "multi_select" => {
            let (payload, payload_path) = required(value, "multi_select", path)?;
            let options: Vec<SelectOption> = serde_json::from_value(payload.clone())
                .map_err(|e| DecodeError::shape(payload_path, "array of options", e.to_string()))?;
            Ok(PropertyValue::MultiSelect(options))
        }
        "select" => {
            let (payload, payload_path) = required(value, "select", path)?;
            let option: Option<SelectOption> = serde_json::from_value(payload.clone())
                .map_err(|e| DecodeError::shape(payload_path, "option or null", e.to_string()))?;
            Ok(PropertyValue::Select(option))
        }
        "number" => {
            let (payload, payload_path) = required(value, "number", path)?;
            let number: Option<f64> = serde_json::from_value(payload.clone())
                .map_err(|e| DecodeError::shape(payload_path, "number or null", e.to_string()))?;
            Ok(PropertyValue::Number(number))
        }
        "date" => {
            let (payload, payload_path) = required(value, "date", path)?;
            let date = serde_json::from_value(payload.clone())
                .map_err(|e| DecodeError::shape(payload_path, "date object or null", e.to_string()))?;
            Ok(PropertyValue::Date(date))
        }
        "checkbox" => {
            let (payload, payload_path) = required(value, "checkbox", path)?;
            Ok(PropertyValue::Checkbox(expect_bool(payload, &payload_path)?))
        }
        other => Err(DecodeError::UnsupportedVariant {
            path: path.to_string(),
            variant: other.to_string(),
        }),
    }
}

/// Decodes one content block by its `type` discriminant.
///
/// Unknown block types decode successfully as `Unsupported`: one
/// unrecognized block must not lose the rest of the page.
fn decode_block(value: &Value, path: &str) -> Result<Block, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::shape(path, "object", kind(value)));
    }

    let (id, id_path) = required(value, "id", path)?;
    let common = BlockCommon::new(BlockId::from_api(expect_str(id, &id_path)?.to_string()));

    let (discriminant, type_path) = required(value, "type", path)?;
    let discriminant = expect_str(discriminant, &type_path)?;

    let block = match discriminant {
        "paragraph" => Block::Paragraph(decode_text_block(value, "paragraph", path, common)?),
        "heading_1" => Block::Heading1(decode_text_block(value, "heading_1", path, common)?),
        "heading_2" => Block::Heading2(decode_text_block(value, "heading_2", path, common)?),
        "heading_3" => Block::Heading3(decode_text_block(value, "heading_3", path, common)?),
        "bulleted_list_item" => {
            Block::BulletedListItem(decode_text_block(value, "bulleted_list_item", path, common)?)
        }
        "numbered_list_item" => {
            Block::NumberedListItem(decode_text_block(value, "numbered_list_item", path, common)?)
        }
        "code" => {
            let (payload, payload_path) = required(value, "code", path)?;
            let (spans, spans_path) = required(payload, "rich_text", &payload_path)?;
            let language = payload
                .get("language")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Block::Code(CodeBlock {
                common,
                language,
                rich_text: decode_spans(spans, &spans_path)?,
            })
        }
        other => Block::Unsupported(UnsupportedBlock {
            common,
            block_type: other.to_string(),
        }),
    };

    Ok(block)
}

fn decode_text_block(
    value: &Value,
    key: &str,
    path: &str,
    common: BlockCommon,
) -> Result<TextBlock, DecodeError> {
    let (payload, payload_path) = required(value, key, path)?;
    let (spans, spans_path) = required(payload, "rich_text", &payload_path)?;
    Ok(TextBlock::new(common, decode_spans(spans, &spans_path)?))
}

fn decode_spans(value: &Value, path: &str) -> Result<Vec<RichTextSpan>, DecodeError> {
    let items = expect_array(value, path)?;
    let mut spans = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        spans.push(decode_span(item, &format!("{}[{}]", path, i))?);
    }
    Ok(spans)
}

/// Decodes one inline span.
///
/// Spans of type `text` take their content and link from the `text`
/// payload. Other inline types (mention, equation) fall back to the
/// API-provided `plain_text` rendering.
fn decode_span(value: &Value, path: &str) -> Result<RichTextSpan, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::shape(path, "object", kind(value)));
    }

    let (discriminant, type_path) = required(value, "type", path)?;
    let discriminant = expect_str(discriminant, &type_path)?;

    let annotations: Annotations = match value.get("annotations") {
        Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| {
            DecodeError::shape(format!("{}.annotations", path), "annotations object", e.to_string())
        })?,
        None => Annotations::default(),
    };

    if discriminant == "text" {
        let (text, text_path) = required(value, "text", path)?;
        let (content, content_path) = required(text, "content", &text_path)?;
        let plain_text = expect_str(content, &content_path)?.to_string();
        let href = match text.get("link") {
            Some(Value::Object(link)) => link.get("url").and_then(Value::as_str).map(str::to_string),
            _ => None,
        };
        Ok(RichTextSpan {
            plain_text,
            annotations,
            href,
        })
    } else {
        let plain_text = value
            .get("plain_text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let href = value.get("href").and_then(Value::as_str).map(str::to_string);
        Ok(RichTextSpan {
            plain_text,
            annotations,
            href,
        })
    }
}

// --- Shape helpers ---

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required<'a>(value: &'a Value, key: &str, path: &str) -> Result<(&'a Value, String), DecodeError> {
    let child_path = format!("{}.{}", path, key);
    match value.get(key) {
        Some(child) => Ok((child, child_path)),
        None => Err(DecodeError::shape(child_path, "a value", "absent")),
    }
}

fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::shape(path, "string", kind(value)))
}

fn expect_bool(value: &Value, path: &str) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::shape(path, "boolean", kind(value)))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, DecodeError> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::shape(path, "array", kind(value)))
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a serde_json::Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::shape(path, "object", kind(value)))
}
