//! MCP tool implementations.
//!
//! This module contains all tools exposed by the tagbot server.

pub mod create_tags;
pub mod extract_tags;
pub mod tag_message;

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tagbot_core::TagList;

/// Output shared by the tagging tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TagsOutput {
    /// The URL that was tagged, when the page was fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Tags in order, title tags first.
    pub tags: Vec<String>,
    /// Comma-separated tags, or the no-tags message.
    pub display: String,
}

impl TagsOutput {
    pub fn new(url: Option<String>, tags: TagList) -> Self {
        let display = tags.to_string();
        Self { url, tags: tags.into_vec(), display }
    }
}

fn json_result<T: Serialize>(output: &T) -> CallToolResult {
    CallToolResult::success(vec![Content::text(serde_json::to_string_pretty(output).unwrap_or_default())])
}

#[cfg(test)]
pub(crate) fn parse_output<T: serde::de::DeserializeOwned>(result: &CallToolResult) -> T {
    let text = result.content.first().and_then(|c| c.as_text()).map(|t| t.text.clone()).unwrap();
    serde_json::from_str(&text).unwrap()
}
