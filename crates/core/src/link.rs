//! Finding the link a tag request refers to.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>]+").expect("link pattern is valid"));

/// Return the first `http(s)://` link in `text`.
///
/// Angle brackets end a link so that `<https://example.com>` (a suppressed
/// embed in most chat clients) yields the bare URL.
pub fn find_link(text: &str) -> Result<&str, Error> {
    LINK_RE.find(text).map(|m| m.as_str()).ok_or(Error::NoLinkFound)
}
