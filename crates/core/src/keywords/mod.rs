//! Keyword extraction pipeline.
//!
//! ### Stages
//! - **Tokenize**: Treebank-style word tokens, original case preserved.
//! - **Tag**: part-of-speech labels from a [`PosTagger`] on the original-case
//!   tokens, since capitalisation separates proper nouns from common ones.
//! - **Filter**: keep NN, NNS, NNP, NNPS and JJS only, then lowercase and drop
//!   anything that is not purely alphabetic or is 21+ characters long.
//! - **Rank**: title words by part of speech (max 3), body words by frequency
//!   with a minimum of 3 occurrences (max 7).
//! - **Compose**: title first, body duplicates removed, capitalized.
//!
//! Everything here is pure and deterministic.

pub mod compose;
pub mod lexicon;
pub mod pos;
pub mod rank;
pub mod tagger;
pub mod tokenize;

pub use compose::{NO_TAGS_MESSAGE, TagList, compose};
pub use pos::{PartOfSpeech, PennTag, PosTagger, TaggedWord};
pub use rank::{BODY_TAG_LIMIT, MIN_BODY_OCCURRENCES, TITLE_TAG_LIMIT, rank_body, rank_title};
pub use tagger::LexiconTagger;
pub use tokenize::tokenize;

use crate::page::PageContent;

/// Words this long or longer are treated as junk.
pub const MAX_WORD_CHARS: usize = 21;

/// Tokenize, tag, filter and normalize `text`.
pub fn tag_words(text: &str, tagger: &dyn PosTagger) -> Vec<TaggedWord> {
    let tokens = tokenize(text);
    let labels = tagger.tag(&tokens);
    if labels.len() != tokens.len() {
        tracing::warn!(tokens = tokens.len(), labels = labels.len(), "tagger label count mismatch");
    }

    tokens
        .into_iter()
        .zip(labels)
        .filter_map(|(token, label)| PartOfSpeech::from_penn(label).map(|pos| (token, pos)))
        .filter_map(|(token, pos)| normalize(&token).map(|word| TaggedWord::new(word, pos)))
        .collect()
}

fn normalize(token: &str) -> Option<String> {
    let alphabetic = !token.is_empty() && token.chars().all(char::is_alphabetic);
    if alphabetic && token.chars().count() < MAX_WORD_CHARS { Some(token.to_lowercase()) } else { None }
}

/// Run the full pipeline over extracted page content.
pub fn tags_for_page(page: &PageContent, tagger: &dyn PosTagger) -> TagList {
    let title_words = tag_words(&page.title, tagger);
    let body_words = tag_words(&page.body, tagger);

    let title = rank_title(&title_words);
    let body = rank_body(&body_words);

    tracing::debug!(
        title_words = title_words.len(),
        body_words = body_words.len(),
        title_tags = title.len(),
        body_tags = body.len(),
        "ranked page words"
    );

    TagList::from_ranked(&title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PartOfSpeech::*;

    fn page(title: &str, body: &str) -> PageContent {
        PageContent { title: title.into(), body: body.into() }
    }

    fn tags(title: &str, body: &str) -> String {
        tags_for_page(&page(title, body), &LexiconTagger).to_string()
    }

    #[test]
    fn test_tag_words_empty() {
        assert!(tag_words("", &LexiconTagger).is_empty());
    }

    #[test]
    fn test_tag_words_lowercases_after_tagging() {
        let tagged = tag_words("This test only has a title. Title title title.", &LexiconTagger);
        assert_eq!(tagged, [
            TaggedWord::new("test", NounSingular),
            TaggedWord::new("title", NounSingular),
            TaggedWord::new("title", ProperNounSingular),
            TaggedWord::new("title", NounSingular),
            TaggedWord::new("title", NounSingular),
        ]);
    }

    #[test]
    fn test_tag_words_each_word_once() {
        let tagged = tag_words("This text has each word only occuring one time.", &LexiconTagger);
        let words: Vec<&str> = tagged.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["text", "word", "time"]);
    }

    #[test]
    fn test_tag_words_drops_numbers_and_symbols() {
        let tagged = tag_words("the numbers 1 12 0 98 4567 234-2 4,956 6.78 and U.S.S.R", &LexiconTagger);
        let words: Vec<&str> = tagged.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["numbers"]);
    }

    #[test]
    fn test_tag_words_drops_long_words() {
        let text = "Incomprehensibilities Pneumonoultramicroscopicsilicovolcanoconiosis Thyroparathyroidectomized";
        assert!(tag_words(text, &LexiconTagger).is_empty());
    }

    #[test]
    fn test_tag_words_drops_detached_clitics() {
        let tagged = tag_words("John 's book and you 're here , we 'll see", &LexiconTagger);
        let words: Vec<&str> = tagged.iter().map(|w| w.word.as_str()).collect();
        assert!(words.contains(&"book"), "{words:?}");
        assert!(!words.iter().any(|w| matches!(*w, "s" | "re" | "ll")), "{words:?}");
    }

    #[test]
    fn test_tag_words_keeps_twenty_char_words() {
        let tagged = tag_words("the abcdefghijklmnopqrst abcdefghijklmnopqrstu", &LexiconTagger);
        let words: Vec<&str> = tagged.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["abcdefghijklmnopqrst"]);
    }

    #[test]
    fn test_tags_empty_page() {
        assert_eq!(tags("", ""), "No tags were found.");
    }

    #[test]
    fn test_tags_title_wins_over_body() {
        let body = "This is a body of text. It has duplicate words like title title tile and text text text \
                    to check for duplicate removal and adding one tag from the body.";
        assert_eq!(tags("This is a title", body), "Title, Text");
    }

    #[test]
    fn test_tags_body_only() {
        assert_eq!(tags("", "This test only has a body. Test test test."), "Test");
    }

    #[test]
    fn test_tags_title_only_keeps_repeated_surface_form() {
        assert_eq!(tags("This test only has a title. Title title title.", ""), "Title, Test, Title");
    }

    #[test]
    fn test_tags_deterministic() {
        let body = "Rust crates crates crates compile. Cargo builds crates and cargo cargo tests.";
        assert_eq!(tags("Cargo Book", body), tags("Cargo Book", body));
    }
}
