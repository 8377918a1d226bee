//! Chat command handling.
//!
//! Platform-neutral: the caller supplies one inbound message and sends back
//! whatever reply this returns. Two commands are recognised anywhere in the
//! message text, `!help` and `!tag`. `!tag` must be sent as a reply to the
//! message holding the link.

use tagbot_client::TagPipeline;
use tagbot_core::{ErrorCategory, find_link};

pub const HELP_COMMAND: &str = "!help";
pub const TAG_COMMAND: &str = "!tag";

pub const HELP_REPLY: &str = "Reply to a message that contains a link with `!tag` and I will answer \
                              with keyword tags for the linked webpage.";
pub const NOT_A_REPLY: &str = "!tag must be called in a reply.";
pub const NO_LINK_REPLY: &str = "To tag a message, it must contain a link to a webpage.";
pub const NO_TITLE_REPLY: &str = "Tags could not be found for that webpage.";
pub const FAILURE_REPLY: &str = "An error occurred. Check the log for details.";
pub const TAGS_PREFIX: &str = "Here are your tags:\n";

/// One inbound chat message.
#[derive(Debug, Clone, Default)]
pub struct ChatMessage {
    pub author: String,
    pub content: String,
    /// Content of the message this one replies to, if any.
    pub referenced_content: Option<String>,
    /// Sent by the bot itself.
    pub from_self: bool,
}

/// Work out the reply for `message`, or `None` when it needs no answer.
pub async fn handle_message(pipeline: &TagPipeline, message: &ChatMessage) -> Option<String> {
    if message.from_self {
        return None;
    }
    if message.content.contains(HELP_COMMAND) {
        tracing::info!(author = %message.author, "help requested");
        return Some(HELP_REPLY.to_string());
    }
    if !message.content.contains(TAG_COMMAND) {
        return None;
    }

    let Some(referenced) = message.referenced_content.as_deref() else {
        tracing::info!(author = %message.author, "tag request outside of a reply");
        return Some(NOT_A_REPLY.to_string());
    };

    let Ok(url) = find_link(referenced) else {
        tracing::info!(author = %message.author, "tag request to a message without a link");
        return Some(NO_LINK_REPLY.to_string());
    };

    let reply = match pipeline.create_tags(url).await {
        Ok(tags) => {
            tracing::info!(author = %message.author, url, "successful tag request");
            format!("{TAGS_PREFIX}{tags}")
        }
        Err(err) => match err.category() {
            ErrorCategory::NoLinkFound => {
                tracing::info!(author = %message.author, "tag request to a message without a link");
                NO_LINK_REPLY.to_string()
            }
            ErrorCategory::PageMalformed => {
                tracing::info!(author = %message.author, url, error = %err, "tag request to a page without a title");
                NO_TITLE_REPLY.to_string()
            }
            ErrorCategory::FetchFailed => {
                tracing::error!(author = %message.author, url, error = %err, "tag request failed");
                FAILURE_REPLY.to_string()
            }
        },
    };
    Some(reply)
}
