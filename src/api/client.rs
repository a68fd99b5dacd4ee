// src/api/client.rs
//! HTTP client for the two Notion API operations this crate consumes.
//!
//! A thin wrapper around reqwest handling authentication headers, path
//! construction and status checking. Parsing lives in the model layer;
//! business logic above that. Requests are never retried automatically.

use crate::constants::{ERROR_BODY_PREVIEW_LENGTH, NOTION_API_PAGE_SIZE, REQUEST_TIMEOUT};
use crate::error::AppError;
use crate::model::{self, Block, QueryPage};
use crate::types::{ApiKey, DatabaseId, PageId};
use reqwest::{header, Client, Response};
use serde_json::Value;
use url::Url;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base: Url,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    ///
    /// The bearer token is injected here by the embedding application;
    /// the client never reads credentials from the environment. Every
    /// request carries the same three headers, so they are installed as
    /// reqwest defaults once.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let mut bearer =
            header::HeaderValue::from_str(&format!("Bearer {}", api_key.as_str())).map_err(
                |e| AppError::MissingConfiguration(format!("token is not header-safe: {}", e)),
            )?;
        bearer.set_sensitive(true);

        let mut headers = header::HeaderMap::with_capacity(3);
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base = Url::parse(API_BASE_URL)
            .map_err(|e| AppError::MissingConfiguration(format!("invalid API base URL: {}", e)))?;
        Ok(Self { client, base })
    }

    /// Builds an endpoint URL, percent-encoding each path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        url
    }

    /// Issues one database query request, returning one page of results.
    pub async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<QueryPage, AppError> {
        let url = self.endpoint(&["databases", &database.to_hyphenated(), "query"]);

        let mut body = serde_json::json!({ "page_size": NOTION_API_PAGE_SIZE });
        if let Some(cursor) = cursor {
            body["start_cursor"] = serde_json::json!(cursor);
        }

        log::debug!("POST {}", url);
        let response = self.client.post(url).json(&body).send().await?;
        let value = success_json(response).await?;
        Ok(model::decode_query_page(&value)?)
    }

    /// Lists a page's child blocks.
    ///
    /// Returns exactly one response page's results.
    pub async fn list_block_children(&self, page: &PageId) -> Result<Vec<Block>, AppError> {
        let url = self.endpoint(&["blocks", &page.to_hyphenated(), "children"]);

        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let value = success_json(response).await?;
        Ok(model::decode_block_list(&value)?)
    }
}

#[async_trait::async_trait]
impl super::NotionSource for NotionHttpClient {
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<QueryPage, AppError> {
        NotionHttpClient::query_database(self, database, cursor).await
    }

    async fn list_block_children(&self, page: &PageId) -> Result<Vec<Block>, AppError> {
        NotionHttpClient::list_block_children(self, page).await
    }
}

/// Checks the response status and parses the body as JSON.
///
/// A non-2xx status becomes an API error carrying a truncated body
/// snippet; a body that is not JSON becomes a decode error.
async fn success_json(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Notion API error {} from {}", status, url);
        return Err(AppError::Api {
            status,
            body: body_snippet(&body),
        });
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("failed to parse response from {}: {}", url, e);
        crate::error::DecodeError::shape("$", "JSON document", e.to_string()).into()
    })
}

/// Truncates an error body for display without splitting a character.
fn body_snippet(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}
