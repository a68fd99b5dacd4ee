// src/model/page.rs
use crate::types::{plain_text_of, PageId, RichTextSpan};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Title shown for a page whose properties carry no title property.
const UNTITLED: &str = "Untitled";

/// A select or multi-select option. Identity is by `id`; `name` is what
/// readers see and what the tag filter matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A date property payload.
///
/// Notion sends `start` either as a bare date (`2024-08-16`) or as a full
/// RFC 3339 timestamp depending on whether the author included a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    pub end: Option<String>,
    pub time_zone: Option<String>,
}

impl DateValue {
    /// The calendar date of `start`, tolerant of both wire formats.
    pub fn start_date(&self) -> Option<NaiveDate> {
        chrono::DateTime::parse_from_rfc3339(&self.start)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| self.start.parse::<NaiveDate>().ok())
    }
}

/// A page property value: a tagged union over the property kinds this
/// crate consumes.
///
/// `Select`, `Number` and `Date` are nullable on the wire (a row can have
/// the column but no value), hence the `Option` payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyValue {
    Title(Vec<RichTextSpan>),
    RichText(Vec<RichTextSpan>),
    MultiSelect(Vec<SelectOption>),
    Select(Option<SelectOption>),
    Number(Option<f64>),
    Date(Option<DateValue>),
    Checkbox(bool),
}

/// One Notion database row.
///
/// Property keys are user-defined in the source workspace and not fixed,
/// so every derived accessor tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: PageId,
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    /// The page title: concatenated plain text of the first title-type
    /// property, or the `Untitled` sentinel if the page has none.
    pub fn title(&self) -> String {
        for value in self.properties.values() {
            if let PropertyValue::Title(spans) = value {
                let title = plain_text_of(spans);
                if !title.is_empty() {
                    return title;
                }
            }
        }
        UNTITLED.to_string()
    }

    /// Tag names from the first multi-select property, or empty.
    pub fn tags(&self) -> Vec<String> {
        for value in self.properties.values() {
            if let PropertyValue::MultiSelect(options) = value {
                return options.iter().map(|o| o.name.clone()).collect();
            }
        }
        Vec::new()
    }

    /// The first populated date property's calendar date, used to order a
    /// blog listing newest-first.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.properties.values().find_map(|value| match value {
            PropertyValue::Date(Some(date)) => date.start_date(),
            _ => None,
        })
    }
}

/// One page of paginated database-query results.
///
/// Constructed per HTTP response, never persisted. Callers loop on
/// `next_cursor` until `has_more` is false to obtain the full result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPage {
    pub results: Vec<Page>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RichTextSpan;

    fn page_with(properties: Vec<(&str, PropertyValue)>) -> Page {
        Page {
            id: PageId::new_v4(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn title_comes_from_first_title_property() {
        let page = page_with(vec![
            ("Name", PropertyValue::Title(vec![RichTextSpan::plain("My Post")])),
            ("Note", PropertyValue::RichText(vec![RichTextSpan::plain("body")])),
        ]);
        assert_eq!(page.title(), "My Post");
    }

    #[test]
    fn missing_title_falls_back_to_untitled() {
        let page = page_with(vec![("Done", PropertyValue::Checkbox(true))]);
        assert_eq!(page.title(), "Untitled");
    }

    #[test]
    fn tags_come_from_multi_select() {
        let page = page_with(vec![(
            "Tags",
            PropertyValue::MultiSelect(vec![
                SelectOption {
                    id: "t1".into(),
                    name: "rust".into(),
                    color: "orange".into(),
                },
                SelectOption {
                    id: "t2".into(),
                    name: "notes".into(),
                    color: "blue".into(),
                },
            ]),
        )]);
        assert_eq!(page.tags(), vec!["rust", "notes"]);
    }

    #[test]
    fn pages_without_multi_select_have_no_tags() {
        let page = page_with(vec![]);
        assert!(page.tags().is_empty());
    }

    #[test]
    fn start_date_accepts_both_wire_formats() {
        let bare = DateValue {
            start: "2024-08-16".into(),
            end: None,
            time_zone: None,
        };
        let stamped = DateValue {
            start: "2024-08-16T09:30:00.000+09:00".into(),
            end: None,
            time_zone: None,
        };
        assert_eq!(bare.start_date(), stamped.start_date());
    }
}
