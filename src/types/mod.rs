// src/types/mod.rs
//! Domain newtypes shared across the crate: ids, credentials, rich text.

mod api_key;
mod ids;
mod rich_text;

pub use api_key::ApiKey;
pub use ids::{BlockId, DatabaseId, Id, PageId};
pub use rich_text::{plain_text_of, Annotations, RichTextSpan};

use thiserror::Error;

/// Validation failure at the configuration boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid Notion ID: {0}")]
    InvalidId(String),

    #[error("invalid API key: {reason}")]
    InvalidApiKey { reason: String },
}
