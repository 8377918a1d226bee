//! Title and body ranking strategies.

use indexmap::IndexMap;

use super::pos::TaggedWord;

/// Most tags the page title may contribute.
pub const TITLE_TAG_LIMIT: usize = 3;

/// Most tags the page body may contribute.
pub const BODY_TAG_LIMIT: usize = 7;

/// Body words occurring fewer times than this are never tags.
pub const MIN_BODY_OCCURRENCES: usize = 3;

/// Rank title words by part of speech: NNPS, NNP, NNS, NN, then JJS.
///
/// The sort is stable, so words sharing a part of speech keep their input
/// order. Duplicates are not removed.
pub fn rank_title(tagged: &[TaggedWord]) -> Vec<String> {
    let mut ordered: Vec<&TaggedWord> = tagged.iter().collect();
    ordered.sort_by_key(|w| w.part_of_speech);
    ordered.into_iter().take(TITLE_TAG_LIMIT).map(|w| w.word.clone()).collect()
}

/// Rank body words by how often they occur.
///
/// Words seen fewer than [`MIN_BODY_OCCURRENCES`] times are dropped. Equal
/// counts keep the order in which the words first appeared.
pub fn rank_body(tagged: &[TaggedWord]) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for w in tagged {
        *counts.entry(w.word.as_str()).or_insert(0) += 1;
    }

    let mut frequent: Vec<(&str, usize)> = counts.into_iter().filter(|&(_, n)| n >= MIN_BODY_OCCURRENCES).collect();
    frequent.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::trace!(distinct = frequent.len(), "ranked body words");

    frequent.into_iter().take(BODY_TAG_LIMIT).map(|(w, _)| w.to_string()).collect()
}
