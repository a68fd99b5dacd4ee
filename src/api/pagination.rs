// src/api/pagination.rs
//! Cursor loop over paginated database-query results.

use crate::error::AppError;
use crate::model::Page;
use std::future::Future;

/// Fetches every page of a database query by looping the cursor until the
/// API reports no more results.
pub async fn fetch_all_query_pages<F, Fut>(mut fetch_fn: F) -> Result<Vec<Page>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<crate::model::QueryPage, AppError>>,
{
    let mut all_pages = Vec::new();
    let mut cursor = None;

    loop {
        let response = fetch_fn(cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor.clone();
        all_pages.extend(response.results);

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!("fetched {} pages across the full cursor walk", all_pages.len());
    Ok(all_pages)
}
