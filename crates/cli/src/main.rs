//! `tagbot` command-line entry point.
//!
//! Prints the tags for a URL, a saved HTML file or literal text.
//! Logs go to stderr; set `RUST_LOG=debug` to see pipeline timings.

use anyhow::{Context, Result};
use clap::Parser;
use tagbot_client::TagPipeline;
use tagbot_core::{AppConfig, Error, ErrorCategory, LexiconTagger, PageContent, TagList, tags_for_page};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;
    let pipeline = TagPipeline::from_config(&config)?;

    let tags = match cli.command {
        Commands::Url { url } => pipeline.create_tags(&url).await.map_err(explain)?,
        Commands::File { path } => {
            let html = std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
            pipeline.tags_for_html(&html, None).map_err(explain)?
        }
        Commands::Text { title, body } => text_tags(title, body),
    };

    println!("{tags}");
    Ok(())
}

fn text_tags(title: String, body: String) -> TagList {
    tags_for_page(&PageContent { title, body }, &LexiconTagger)
}

fn explain(err: Error) -> anyhow::Error {
    let message = describe(err.category());
    tracing::debug!(error = %err, "tagging failed");
    anyhow::Error::new(err).context(message)
}

fn describe(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::NoLinkFound => "no link to a webpage was given",
        ErrorCategory::PageMalformed => "tags could not be found for that webpage",
        ErrorCategory::FetchFailed => "the webpage could not be fetched",
    }
}
