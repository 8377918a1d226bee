//! Extracted page text.

/// Title and visible text of one fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    /// Text of the first `title` element under `head`.
    pub title: String,
    /// All visible text nodes in document order, unnormalized.
    pub body: String,
}
