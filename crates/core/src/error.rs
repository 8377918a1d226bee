//! Unified error types for tagbot.
//!
//! Every failure of a tag request is terminal for that request. The caller
//! picks a user-facing message from [`Error::category`].

use std::fmt;

/// What part of the transport failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// DNS resolution or TCP/TLS connect failed.
    Connect,
    /// Redirect loop or too many redirects.
    Redirect,
    /// The response body could not be read.
    Body,
    /// Any other request failure.
    Request,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetworkErrorKind::Connect => "connect",
            NetworkErrorKind::Redirect => "redirect",
            NetworkErrorKind::Body => "body",
            NetworkErrorKind::Request => "request",
        };
        f.write_str(s)
    }
}

/// Caller-facing failure classes of a tag request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The page could not be retrieved.
    FetchFailed,
    /// The input message did not contain a URL.
    NoLinkFound,
    /// The page was retrieved but has no `head > title`.
    PageMalformed,
}

/// Unified error types for tagbot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL could not be parsed or uses an unsupported scheme.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// No link was present in the message being tagged.
    #[error("NO_LINK_FOUND")]
    NoLinkFound,

    /// Transport-level failure.
    #[error("NETWORK_ERROR: {kind}: {message}")]
    Network { kind: NetworkErrorKind, message: String },

    /// No response within the configured timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Response body larger than the configured cap.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// Non-success HTTP status.
    #[error("HTTP_ERROR: status {code}")]
    HttpStatus { code: u16 },

    /// Page has no title element under its head.
    #[error("PAGE_MALFORMED: {0}")]
    PageMalformed(String),
}

impl Error {
    /// Collapse this error onto the caller-facing taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NoLinkFound => ErrorCategory::NoLinkFound,
            Error::PageMalformed(_) => ErrorCategory::PageMalformed,
            Error::InvalidUrl(_)
            | Error::Network { .. }
            | Error::FetchTimeout(_)
            | Error::FetchTooLarge(_)
            | Error::HttpStatus { .. } => ErrorCategory::FetchFailed,
        }
    }
}
