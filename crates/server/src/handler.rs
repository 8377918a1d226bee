//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{
    create_tags::{CreateTagsParams, create_tags_impl},
    extract_tags::{ExtractTagsParams, extract_tags_impl},
    tag_message::{TagMessageParams, tag_message_impl},
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use tagbot_client::TagPipeline;

/// The main MCP server handler for tagbot.
#[derive(Clone)]
pub struct TagBotServer {
    pipeline: Arc<TagPipeline>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TagBotServer {
    pub fn new(pipeline: TagPipeline) -> Self {
        Self { pipeline: Arc::new(pipeline), tool_router: Self::tool_router() }
    }

    #[tool(
        description = "Fetch a webpage and return up to 10 keyword tags: nouns from its title first, then words repeated at least three times in its text."
    )]
    async fn create_tags(&self, params: Parameters<CreateTagsParams>) -> Result<CallToolResult, McpError> {
        create_tags_impl(&self.pipeline, params.0).await
    }

    #[tool(description = "Return keyword tags for raw HTML supplied by the caller. No network requests are made.")]
    async fn extract_tags(&self, params: Parameters<ExtractTagsParams>) -> Result<CallToolResult, McpError> {
        extract_tags_impl(&self.pipeline, params.0)
    }

    #[tool(
        description = "Handle one chat message containing !tag or !help. Pass the replied-to message as referenced_content. Returns the reply to send, if any."
    )]
    async fn tag_message(&self, params: Parameters<TagMessageParams>) -> Result<CallToolResult, McpError> {
        tag_message_impl(&self.pipeline, params.0).await
    }
}

impl ServerHandler for TagBotServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "tagbot".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some("Keyword tags for webpages. Use create_tags with a URL, or tag_message for chat.".into()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
