// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2blog::api::NotionHttpClient;
use notion2blog::catalog::Catalog;
use notion2blog::config::{AppConfig, CommandLineInput};
use notion2blog::error::AppError;

/// Console logging on stderr, with a full debug-level copy in the
/// temp directory for diagnosing failed runs after the fact.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();

    let log_path = std::env::temp_dir().join("notion2blog.log");
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%dT%H:%M:%S)} {l} {t} - {m}{n}",
        )))
        .build(&log_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("console", Box::new(console)),
        )
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(
            Root::builder()
                .appender("console")
                .appender("logfile")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::debug!("log file at {}", log_path.display());
    Ok(())
}

/// Runs the list-or-render flow against the configured database.
async fn run(config: &AppConfig) -> Result<(), AppError> {
    let client = NotionHttpClient::new(&config.api_key)?;
    let catalog = Catalog::new(client);

    if let Some(page_id) = &config.page_id {
        log::info!("rendering page {}", page_id);
        let markdown = catalog.load_page_content(page_id).await?;
        println!("{}", markdown);
        return Ok(());
    }

    let pages = catalog.list_pages(&config.database_id).await?;
    log::info!("fetched {} pages from {}", pages.len(), config.database_id);

    if let Some(filter) = &config.filter {
        catalog.set_filter(filter);
    }

    for page in catalog.filtered_pages() {
        let tags = page.tags();
        if tags.is_empty() {
            println!("{}  {}", page.id, page.title());
        } else {
            println!("{}  {}  [{}]", page.id, page.title(), tags.join(", "));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = AppConfig::resolve(cli).context("could not resolve configuration")?;

    run(&config).await?;

    Ok(())
}
