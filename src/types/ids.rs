// src/types/ids.rs
//! Typed Notion object ids.
//!
//! One id type per object kind, so a page id can never be handed to a
//! database endpoint by accident. Whatever shape the caller pastes in,
//! the id is stored in Notion's canonical simple form: 32 lowercase hex
//! characters, no hyphens.

use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// A Notion object id, typed by the kind of object it names.
pub struct Id<K> {
    value: String,
    _kind: PhantomData<K>,
}

// Kind markers. Empty enums: never constructed, only named in types.
pub enum PageKind {}
pub enum BlockKind {}
pub enum DatabaseKind {}

pub type PageId = Id<PageKind>;
pub type BlockId = Id<BlockKind>;
pub type DatabaseId = Id<DatabaseKind>;

/// The 32-hex run a notion.so share URL embeds after the page title.
static SHARE_URL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[0-9a-f]{32}").expect("static pattern compiles"));

impl<K> Id<K> {
    /// Parses any shape a user is likely to paste: the simple 32-hex
    /// form, a hyphenated UUID, or a notion.so share URL.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            // The id is the last hex run in the URL path; earlier runs can
            // occur in workspace names.
            let path = trimmed.split('?').next().unwrap_or(trimmed);
            return match SHARE_URL_ID.find_iter(path).last() {
                Some(found) => Self::parse(found.as_str()),
                None => Err(ValidationError::InvalidId(format!(
                    "no object id found in URL: {}",
                    trimmed
                ))),
            };
        }

        match Uuid::try_parse(trimmed) {
            Ok(uuid) => Ok(Self::wrap(uuid.as_simple().to_string())),
            Err(_) => Err(ValidationError::InvalidId(format!(
                "`{}` is not a Notion object id",
                trimmed
            ))),
        }
    }

    /// Wraps an id string the API already vouched for.
    pub(crate) fn from_api(value: String) -> Self {
        Self::wrap(value)
    }

    /// A fresh random id, for builders and tests.
    pub fn new_v4() -> Self {
        Self::wrap(Uuid::new_v4().as_simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The hyphenated form the API expects in request paths.
    pub fn to_hyphenated(&self) -> String {
        match Uuid::try_parse(&self.value) {
            Ok(uuid) => uuid.as_hyphenated().to_string(),
            Err(_) => self.value.clone(),
        }
    }

    fn wrap(value: String) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }
}

// Manual impls rather than derives: a derive would demand the kind
// marker itself be Clone/Eq/Hash, and markers are never values.
impl<K> Clone for Id<K> {
    fn clone(&self) -> Self {
        Self::wrap(self.value.clone())
    }
}

impl<K> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for Id<K> {}

impl<K> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<K> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K> Serialize for Id<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, K> Deserialize<'de> for Id<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from_api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_and_hyphenated_forms_parse_to_the_same_id() {
        let simple = PageId::parse("216cd41285338087a989cf37889137c3").unwrap();
        let hyphenated = PageId::parse("216cd412-8533-8087-a989-cf37889137c3").unwrap();
        assert_eq!(simple, hyphenated);
        assert_eq!(simple.as_str(), "216cd41285338087a989cf37889137c3");
    }

    #[test]
    fn hyphenated_form_round_trips_for_api_paths() {
        let id = PageId::parse("216cd41285338087a989cf37889137c3").unwrap();
        assert_eq!(id.to_hyphenated(), "216cd412-8533-8087-a989-cf37889137c3");
    }

    #[test]
    fn share_urls_yield_the_trailing_id() {
        let id = DatabaseId::parse(
            "https://www.notion.so/My-Blog-216cd41285338087a989cf37889137c3?v=abc",
        )
        .unwrap();
        assert_eq!(id.as_str(), "216cd41285338087a989cf37889137c3");
    }

    #[test]
    fn rejects_anything_that_is_not_an_id() {
        assert!(PageId::parse("not-an-id").is_err());
        assert!(PageId::parse("216cd412").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/no-id-here").is_err());
    }
}
