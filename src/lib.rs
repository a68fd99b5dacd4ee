// src/lib.rs
//! notion2blog library: retrieves blog content from a Notion workspace
//! and renders it as markdown.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `DecodeError`, `ValidationError`
//! - **Domain types**: `PageId`, `DatabaseId`, `ApiKey`, `RichTextSpan`
//! - **Domain model**: `Page`, `PropertyValue`, `Block`, `QueryPage`
//! - **API client**: `NotionHttpClient`, the `NotionSource` seam
//! - **Rendering**: `render_blocks`
//! - **Orchestration**: `Catalog`, `ContentTask`

pub mod api;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod render;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, DecodeError, Result, StatusCode};
pub use crate::types::ValidationError;

// --- Domain Types ---
pub use crate::types::{Annotations, ApiKey, BlockId, DatabaseId, PageId, RichTextSpan};

// --- Domain Model ---
pub use crate::model::{
    decode_block_list, decode_page, decode_query_page, Block, BlockCommon, CodeBlock, DateValue,
    Page, PropertyValue, QueryPage, SelectOption, TextBlock,
};

// --- API Client ---
pub use crate::api::{NotionHttpClient, NotionSource};

// --- Rendering ---
pub use crate::render::{render_blocks, render_spans};

// --- Orchestration ---
pub use crate::catalog::{filter_pages, Catalog, ContentTask};
