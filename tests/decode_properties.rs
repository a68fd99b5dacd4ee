// tests/decode_properties.rs
//! Unit tests for page and property decoding.

use notion2blog::{decode_page, decode_query_page, DecodeError, PropertyValue};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn decodes_every_supported_property_kind() {
    let raw = json!({
        "id": "216cd412-8533-8087-a989-cf37889137c3",
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [
                    {
                        "type": "text",
                        "text": {"content": "Learning Rust", "link": null},
                        "plain_text": "Learning Rust",
                        "href": null,
                        "annotations": {
                            "bold": false, "italic": false, "strikethrough": false,
                            "underline": false, "code": false, "color": "default"
                        }
                    }
                ]
            },
            "Summary": {
                "id": "s1",
                "type": "rich_text",
                "rich_text": [
                    {"type": "text", "text": {"content": "An intro post", "link": null}}
                ]
            },
            "Tags": {
                "id": "t1",
                "type": "multi_select",
                "multi_select": [
                    {"id": "tag1", "name": "rust", "color": "orange"},
                    {"id": "tag2", "name": "tutorial", "color": "blue"}
                ]
            },
            "Status": {
                "id": "st1",
                "type": "select",
                "select": {"id": "opt1", "name": "Published", "color": "green"}
            },
            "Reading minutes": {"id": "n1", "type": "number", "number": 7.5},
            "Published on": {
                "id": "d1",
                "type": "date",
                "date": {"start": "2024-08-16", "end": null, "time_zone": null}
            },
            "Pinned": {"id": "c1", "type": "checkbox", "checkbox": true}
        }
    });

    let page = decode_page(&raw, "$").expect("page should decode");

    assert_eq!(page.id.as_str(), "216cd412-8533-8087-a989-cf37889137c3");
    assert_eq!(page.title(), "Learning Rust");
    assert_eq!(page.tags(), vec!["rust", "tutorial"]);

    match &page.properties["Summary"] {
        PropertyValue::RichText(spans) => assert_eq!(spans[0].plain_text, "An intro post"),
        other => panic!("expected rich text, got {:?}", other),
    }
    match &page.properties["Status"] {
        PropertyValue::Select(Some(option)) => assert_eq!(option.name, "Published"),
        other => panic!("expected select, got {:?}", other),
    }
    match &page.properties["Reading minutes"] {
        PropertyValue::Number(Some(n)) => assert_eq!(*n, 7.5),
        other => panic!("expected number, got {:?}", other),
    }
    match &page.properties["Published on"] {
        PropertyValue::Date(Some(date)) => {
            assert_eq!(date.start, "2024-08-16");
            assert!(date.end.is_none());
        }
        other => panic!("expected date, got {:?}", other),
    }
    assert_eq!(page.properties["Pinned"], PropertyValue::Checkbox(true));
}

#[test]
fn nullable_properties_decode_to_none() {
    let raw = json!({
        "id": "p1",
        "properties": {
            "Status": {"id": "s", "type": "select", "select": null},
            "Count": {"id": "n", "type": "number", "number": null},
            "When": {"id": "d", "type": "date", "date": null}
        }
    });

    let page = decode_page(&raw, "$").unwrap();
    assert_eq!(page.properties["Status"], PropertyValue::Select(None));
    assert_eq!(page.properties["Count"], PropertyValue::Number(None));
    assert_eq!(page.properties["When"], PropertyValue::Date(None));
}

#[test]
fn unsupported_property_discriminant_is_a_decode_failure() {
    let raw = json!({
        "id": "p1",
        "properties": {
            "Owner": {
                "id": "o1",
                "type": "people",
                "people": [{"object": "user", "id": "u1"}]
            }
        }
    });

    let err = decode_page(&raw, "$").expect_err("people is not supported");
    match err {
        DecodeError::UnsupportedVariant { path, variant } => {
            assert_eq!(variant, "people");
            assert!(path.contains("Owner"), "path should name the property: {}", path);
        }
        other => panic!("expected UnsupportedVariant, got {:?}", other),
    }
}

#[test]
fn page_without_title_property_is_untitled() {
    let raw = json!({
        "id": "p1",
        "properties": {
            "Pinned": {"id": "c", "type": "checkbox", "checkbox": false}
        }
    });

    let page = decode_page(&raw, "$").unwrap();
    assert_eq!(page.title(), "Untitled");
    assert!(page.tags().is_empty());
}

#[test]
fn title_plain_text_round_trips_exactly() {
    let raw = json!({
        "id": "p1",
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [
                    {"type": "text", "text": {"content": "Hello, ", "link": null}},
                    {"type": "text", "text": {"content": "世界", "link": null}}
                ]
            }
        }
    });

    let page = decode_page(&raw, "$").unwrap();
    assert_eq!(page.title(), "Hello, 世界");
}

#[test]
fn decodes_a_query_response_page() {
    let raw = json!({
        "object": "list",
        "results": [
            {"id": "p1", "properties": {}},
            {"id": "p2", "properties": {}}
        ],
        "next_cursor": "cursor-abc",
        "has_more": true
    });

    let query_page = decode_query_page(&raw).unwrap();
    assert_eq!(query_page.results.len(), 2);
    assert_eq!(query_page.next_cursor.as_deref(), Some("cursor-abc"));
    assert!(query_page.has_more);
}

#[test]
fn null_cursor_decodes_to_none() {
    let raw = json!({
        "object": "list",
        "results": [],
        "next_cursor": null,
        "has_more": false
    });

    let query_page = decode_query_page(&raw).unwrap();
    assert!(query_page.results.is_empty());
    assert!(query_page.next_cursor.is_none());
    assert!(!query_page.has_more);
}

#[test]
fn unexpected_top_level_shape_is_a_decode_failure() {
    let raw = json!({"object": "error", "status": 400});

    let err = decode_query_page(&raw).expect_err("missing results");
    match err {
        DecodeError::Shape { path, .. } => assert_eq!(path, "$.results"),
        other => panic!("expected Shape, got {:?}", other),
    }
}

#[test]
fn one_bad_page_fails_the_decode_with_its_path() {
    let raw = json!({
        "object": "list",
        "results": [
            {"id": "p1", "properties": {}},
            {"id": "p2", "properties": {"Odd": {"type": "formula", "formula": {}}}}
        ],
        "next_cursor": null,
        "has_more": false
    });

    let err = decode_query_page(&raw).expect_err("formula is not supported");
    match err {
        DecodeError::UnsupportedVariant { path, variant } => {
            assert_eq!(variant, "formula");
            assert!(path.starts_with("$.results[1]"), "path was {}", path);
        }
        other => panic!("expected UnsupportedVariant, got {:?}", other),
    }
}
