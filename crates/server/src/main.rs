//! tagbot server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::{Context, Result};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tagbot_client::TagPipeline;
use tagbot_core::AppConfig;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!(
        timeout_ms = config.timeout_ms,
        max_bytes = config.max_bytes,
        max_redirects = config.max_redirects,
        "Starting tagbot server on stdio transport"
    );

    let pipeline = TagPipeline::from_config(&config)?;
    let handler = handler::TagBotServer::new(pipeline);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
