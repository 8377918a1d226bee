//! Structured errors for the tagbot server.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use tagbot_core::{Error, ErrorCategory};

/// Structured errors for the tagbot server.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid input parameters (e.g., empty HTML).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The tag pipeline failed.
    #[error(transparent)]
    Tagging(#[from] Error),
}

impl ToolError {
    pub fn code(&self) -> i32 {
        match self {
            ToolError::InvalidInput(_) | ToolError::Tagging(Error::InvalidUrl(_)) => -32602,
            ToolError::Tagging(err) => match err.category() {
                ErrorCategory::NoLinkFound => -32602,
                ErrorCategory::FetchFailed => -32000,
                ErrorCategory::PageMalformed => -32001,
            },
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError { code: ErrorCode(err.code()), message: err.to_string().into(), data: None }
    }
}
