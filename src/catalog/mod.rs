// src/catalog/mod.rs
//! Catalog orchestration: list a blog database, filter it, load one
//! page's content as markdown.
//!
//! State handling is single-writer by construction. Every `list_pages`
//! call is tagged with a generation; only the newest generation may
//! publish into the shared state cell, so a slow superseded fetch can
//! never overwrite fresher results. Content fetches are cancellable
//! tasks: cancellation prevents any delivery to the continuation.

use crate::api::{pagination::fetch_all_query_pages, NotionSource};
use crate::error::AppError;
use crate::model::Page;
use crate::render::render_blocks;
use crate::types::{DatabaseId, PageId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Orchestrates content retrieval for one screen session.
///
/// The source is injected at construction; the catalog owns the
/// accumulated page list and the current filter text.
pub struct Catalog<S: NotionSource> {
    source: Arc<S>,
    state: Arc<Mutex<CatalogState>>,
    generation: AtomicU64,
}

#[derive(Default)]
struct CatalogState {
    pages: Vec<Page>,
    query: String,
    last_error: Option<String>,
    published_generation: u64,
}

impl<S: NotionSource + 'static> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(CatalogState::default())),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches the full page list of a database, walking the query cursor
    /// until the API reports no more results.
    ///
    /// On success the result is stored as current state and returned
    /// newest-first. On failure the error is recorded for presentation
    /// and returned unchanged. Previously loaded pages stay in place: a
    /// failed refresh never blanks a populated list. Either way, a
    /// completion that has been superseded by a newer call is discarded.
    pub async fn list_pages(&self, database: &DatabaseId) -> Result<Vec<Page>, AppError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let source = Arc::clone(&self.source);
        let database = database.clone();
        let result = fetch_all_query_pages(move |cursor| {
            let source = Arc::clone(&source);
            let database = database.clone();
            async move { source.query_database(&database, cursor).await }
        })
        .await;

        match result {
            Ok(mut pages) => {
                sort_pages_newest_first(&mut pages);
                let mut state = self.state.lock();
                if generation < state.published_generation {
                    log::debug!(
                        "discarding stale page list (generation {} superseded by {})",
                        generation,
                        state.published_generation
                    );
                    return Ok(pages);
                }
                state.published_generation = generation;
                state.pages = pages.clone();
                state.last_error = None;
                Ok(pages)
            }
            Err(err) => {
                let mut state = self.state.lock();
                if generation >= state.published_generation {
                    state.published_generation = generation;
                    state.last_error = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Replaces the current filter text.
    ///
    /// Filtering itself is synchronous; interactive callers should apply
    /// [`crate::constants::FILTER_DEBOUNCE`] between keystrokes.
    pub fn set_filter(&self, query: &str) {
        self.state.lock().query = query.to_string();
    }

    /// The current page list with the filter applied.
    pub fn filtered_pages(&self) -> Vec<Page> {
        let state = self.state.lock();
        filter_pages(&state.pages, &state.query)
    }

    /// The current unfiltered page list.
    pub fn pages(&self) -> Vec<Page> {
        self.state.lock().pages.clone()
    }

    /// The most recent fetch failure, if the newest fetch failed.
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    /// Fetches one page's blocks and renders them to markdown.
    pub async fn load_page_content(&self, page: &PageId) -> Result<String, AppError> {
        let blocks = self.source.list_block_children(page).await?;
        Ok(render_blocks(&blocks))
    }

    /// Spawns a cancellable content fetch, delivering the discriminated
    /// result to a single continuation.
    ///
    /// Dropping or cancelling the returned task prevents any delivery: a
    /// torn-down view never receives partial markdown.
    pub fn spawn_page_content<F>(&self, page: PageId, on_complete: F) -> ContentTask
    where
        F: FnOnce(Result<String, AppError>) + Send + 'static,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let source = Arc::clone(&self.source);

        let handle = tokio::spawn(async move {
            let fetch = async {
                let blocks = source.list_block_children(&page).await?;
                Ok::<String, AppError>(render_blocks(&blocks))
            };

            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    log::debug!("content fetch for {} cancelled", page);
                }
                result = fetch => {
                    on_complete(result);
                }
            }
        });

        ContentTask {
            token,
            handle: Some(handle),
        }
    }
}

/// Handle to an in-flight content fetch.
pub struct ContentTask {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ContentTask {
    /// Cancels the fetch. The continuation will not run unless it has
    /// already started.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Waits for the task to wind down, whether delivered or cancelled.
    pub async fn finished(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ContentTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Case-insensitive substring filter over title and tags.
///
/// An empty query returns the unfiltered set.
pub fn filter_pages(pages: &[Page], query: &str) -> Vec<Page> {
    if query.is_empty() {
        return pages.to_vec();
    }
    let needle = query.to_lowercase();
    pages
        .iter()
        .filter(|page| {
            page.title().to_lowercase().contains(&needle)
                || page
                    .tags()
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Orders pages by their first date property, newest first. Pages
/// without a date value sort to the bottom.
fn sort_pages_newest_first(pages: &mut [Page]) {
    pages.sort_by(|a, b| match (a.first_date(), b.first_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
