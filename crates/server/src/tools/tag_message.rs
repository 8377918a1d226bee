//! tag_message tool implementation.
//!
//! Runs one chat message through the `!tag`/`!help` command handling and
//! returns the reply a bot should send.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tagbot_client::TagPipeline;

use super::json_result;
use crate::commands::{ChatMessage, handle_message};

/// Input parameters for tag_message tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TagMessageParams {
    /// Display name of the sender, used in logs.
    pub author: String,
    /// Text of the message.
    pub content: String,
    /// Text of the message being replied to, if this is a reply.
    #[serde(default)]
    pub referenced_content: Option<String>,
    /// Set when the message was sent by the bot itself; such messages get no reply.
    #[serde(default)]
    pub from_self: bool,
}

/// Output structure for tag_message tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TagMessageOutput {
    /// Reply to send back, absent when the message needs none.
    pub reply: Option<String>,
}

/// Implementation of the tag_message tool.
pub async fn tag_message_impl(pipeline: &TagPipeline, params: TagMessageParams) -> Result<CallToolResult, McpError> {
    let message = ChatMessage {
        author: params.author,
        content: params.content,
        referenced_content: params.referenced_content,
        from_self: params.from_self,
    };
    let reply = handle_message(pipeline, &message).await;
    Ok(json_result(&TagMessageOutput { reply }))
}
