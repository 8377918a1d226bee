//! Merge ranked title and body words into the displayed tag line.

use std::fmt;

/// Shown when neither the title nor the body yields a tag.
pub const NO_TAGS_MESSAGE: &str = "No tags were found.";

/// Ordered, capitalized tags. Title tags come first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Combine ranked title and body words.
    ///
    /// Body words that also appear among the title words (compared in
    /// lowercase) are dropped; title words are never displaced.
    pub fn from_ranked(title: &[String], body: &[String]) -> Self {
        let title_lower: Vec<String> = title.iter().map(|w| w.to_lowercase()).collect();

        let tags = title
            .iter()
            .chain(body.iter().filter(|w| !title_lower.contains(&w.to_lowercase())))
            .map(|w| capitalize(w))
            .collect();

        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            f.write_str(NO_TAGS_MESSAGE)
        } else {
            f.write_str(&self.tags.join(", "))
        }
    }
}

/// Display string for ranked title and body words.
pub fn compose(title: &[String], body: &[String]) -> String {
    TagList::from_ranked(title, body).to_string()
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
