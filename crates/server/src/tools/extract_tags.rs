//! extract_tags tool implementation.
//!
//! Tags raw HTML supplied by the client. No network I/O is performed.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tagbot_client::TagPipeline;

use super::{TagsOutput, json_result};
use crate::error::ToolError;

const UTF8_HTML: &str = "text/html; charset=utf-8";

/// Input parameters for extract_tags tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractTagsParams {
    /// The raw HTML of the page.
    pub html: String,
}

/// Implementation of the extract_tags tool.
pub fn extract_tags_impl(pipeline: &TagPipeline, params: ExtractTagsParams) -> Result<CallToolResult, McpError> {
    if params.html.trim().is_empty() {
        return Err(ToolError::InvalidInput("html cannot be empty".into()).into());
    }

    // already a Rust string, so any <meta charset> in it no longer applies
    let tags = pipeline.tags_for_html(params.html.as_bytes(), Some(UTF8_HTML)).map_err(ToolError::from)?;
    Ok(json_result(&TagsOutput::new(None, tags)))
}
