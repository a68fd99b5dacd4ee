// src/api/mod.rs
//! Notion API interaction: the ability to retrieve content from a workspace.
//!
//! This module separates the I/O operations from parsing and business
//! logic: the client performs exactly two operations, and everything above
//! it depends on the [`NotionSource`] capability rather than on HTTP.

pub mod client;
pub mod pagination;

use crate::error::AppError;
use crate::model::{Block, QueryPage};
use crate::types::{DatabaseId, PageId};

/// The ability to retrieve blog content from a Notion workspace.
///
/// Services depend on this trait, never on HTTP details. Passing the
/// implementation in explicitly replaces any process-wide client
/// singleton: each service owns its handle.
#[async_trait::async_trait]
pub trait NotionSource: Send + Sync {
    /// One page of database-query results. Callers paginate via
    /// [`pagination::fetch_all_query_pages`].
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<QueryPage, AppError>;

    /// The child blocks of a page. Returns exactly one response page's
    /// results; content beyond the first response page is not fetched.
    async fn list_block_children(&self, page: &PageId) -> Result<Vec<Block>, AppError>;
}

pub use client::NotionHttpClient;
