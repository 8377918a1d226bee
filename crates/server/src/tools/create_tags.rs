//! create_tags tool implementation.
//!
//! Fetches a URL and returns its keyword tags.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tagbot_client::TagPipeline;

use super::{TagsOutput, json_result};
use crate::error::ToolError;

/// Input parameters for create_tags tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTagsParams {
    /// The URL of the webpage to tag.
    pub url: String,
}

/// Implementation of the create_tags tool.
pub async fn create_tags_impl(pipeline: &TagPipeline, params: CreateTagsParams) -> Result<CallToolResult, McpError> {
    let tags = pipeline.create_tags(&params.url).await.map_err(ToolError::from)?;
    Ok(json_result(&TagsOutput::new(Some(params.url), tags)))
}
