// src/config.rs
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, PageId};
use clap::Parser;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion database URL or ID holding the blog entries
    pub database: String,

    /// Notion integration token (falls back to the NOTION_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Case-insensitive title/tag filter applied to the listing
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Render a single page's content as markdown instead of listing
    #[arg(short, long)]
    pub page: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated and ready to drive the catalog.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_id: DatabaseId,
    pub api_key: ApiKey,
    pub filter: Option<String>,
    pub page_id: Option<PageId>,
    pub verbose: bool,
}

impl AppConfig {
    /// Resolves CLI input into a validated configuration.
    ///
    /// The environment fallback for the token lives here, in the
    /// embedding application; the library itself only ever sees the
    /// already-constructed `ApiKey`.
    pub fn resolve(input: CommandLineInput) -> Result<Self, AppError> {
        let token = input
            .token
            .or_else(|| std::env::var("NOTION_TOKEN").ok())
            .ok_or_else(|| {
                AppError::MissingConfiguration(
                    "pass --token or set the NOTION_TOKEN environment variable".to_string(),
                )
            })?;

        let api_key = ApiKey::new(token)?;
        let database_id = DatabaseId::parse(&input.database)?;
        let page_id = input.page.as_deref().map(PageId::parse).transpose()?;

        Ok(Self {
            database_id,
            api_key,
            filter: input.filter,
            page_id,
            verbose: input.verbose,
        })
    }
}
