//! Deterministic rule-based part-of-speech tagger.
//!
//! Tagging happens in two passes, in the manner of a Brill initial-state
//! tagger:
//!
//! 1. Each token gets a label from the closed-class lexicon, capitalisation
//!    cues, or suffix heuristics. Unknown capitalised words are proper nouns.
//! 2. A left-to-right contextual pass fixes common noun/verb confusions using
//!    the neighbouring labels.

use super::lexicon::{closed_class, is_base_verb, is_gradable_adjective, is_irregular_past, is_suffix_exception};
use super::pos::{PennTag, PosTagger};

/// Lexicon and suffix driven tagger for English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PennTag> {
        let mut tags: Vec<PennTag> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let sentence_start = i == 0 || is_sentence_end(&tokens[i - 1]);
                initial_tag(token, sentence_start)
            })
            .collect();

        apply_context(tokens, &mut tags);
        tags
    }
}

fn is_sentence_end(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | "..." | "\u{2026}")
}

fn fold(token: &str) -> String {
    token.to_lowercase().replace('\u{2019}', "'")
}

fn initial_tag(token: &str, sentence_start: bool) -> PennTag {
    if !token.chars().any(char::is_alphanumeric) {
        return PennTag::Punct;
    }
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return PennTag::CD;
    }

    let lower = fold(token);
    let letters = token.chars().filter(|c| c.is_alphabetic()).count();
    let all_caps = letters >= 2 && token.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);

    if all_caps && (lower == "us" || closed_class(&lower).is_none()) {
        return PennTag::NNP;
    }
    if let Some(tag) = closed_class(&lower) {
        return tag;
    }

    if token.chars().next().is_some_and(char::is_uppercase) {
        if sentence_start && let Some(tag) = known_open_class(&lower) {
            return tag;
        }
        return if looks_plural(&lower) { PennTag::NNPS } else { PennTag::NNP };
    }

    open_class(&lower)
}

/// Labels for sentence-initial words that the lexicon knows outright.
fn known_open_class(lower: &str) -> Option<PennTag> {
    if is_base_verb(lower) {
        Some(PennTag::VB)
    } else if is_irregular_past(lower) {
        Some(PennTag::VBD)
    } else if is_superlative(lower) {
        Some(PennTag::JJS)
    } else {
        None
    }
}

fn open_class(lower: &str) -> PennTag {
    let len = lower.chars().count();

    if is_irregular_past(lower) {
        return PennTag::VBD;
    }
    if is_superlative(lower) {
        return PennTag::JJS;
    }
    if is_suffix_exception(lower) {
        return PennTag::NN;
    }
    if lower.contains('-') {
        return PennTag::JJ;
    }
    if len > 4 && lower.ends_with("ly") {
        return PennTag::RB;
    }
    if len > 5 && lower.ends_with("ing") {
        return PennTag::VBG;
    }
    if len > 4 && lower.ends_with("ed") {
        return PennTag::VBD;
    }
    if len > 5 && ["ous", "ful", "less", "ible", "ical", "ive", "able", "ish"].iter().any(|s| lower.ends_with(s)) {
        return PennTag::JJ;
    }
    if looks_plural(lower) {
        return PennTag::NNS;
    }
    PennTag::NN
}

fn looks_plural(lower: &str) -> bool {
    lower.chars().count() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is", "'s"].iter().any(|s| lower.ends_with(s))
}

fn is_superlative(lower: &str) -> bool {
    if is_suffix_exception(lower) {
        return false;
    }
    if let Some(stem) = lower.strip_suffix("iest") {
        return stem.chars().count() >= 2;
    }
    let Some(stem) = lower.strip_suffix("est") else {
        return false;
    };
    if is_gradable_adjective(stem) || is_gradable_adjective(&format!("{stem}e")) {
        return true;
    }
    // big -> biggest
    let mut rev = stem.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) if a == b && !"aeiou".contains(a) => {
            is_gradable_adjective(&stem[..stem.len() - a.len_utf8()])
        }
        _ => false,
    }
}

/// Third person singular verb form of a known base verb.
fn is_verb_s_form(lower: &str) -> bool {
    if let Some(stem) = lower.strip_suffix("ies")
        && is_base_verb(&format!("{stem}y"))
    {
        return true;
    }
    if let Some(stem) = lower.strip_suffix("es")
        && is_base_verb(stem)
    {
        return true;
    }
    lower.strip_suffix('s').is_some_and(is_base_verb)
}

fn is_aux(lower: &str) -> bool {
    matches!(
        lower,
        "has" | "have" | "had" | "having" | "'ve" | "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" | "'re"
    )
}

fn apply_context(tokens: &[String], tags: &mut [PennTag]) {
    for i in 1..tags.len() {
        let prev = tags[i - 1];
        let prev_word = fold(&tokens[i - 1]);
        let lower = fold(&tokens[i]);
        let next = tags.get(i + 1).copied();

        let retagged = match tags[i] {
            PennTag::NN if matches!(prev, PennTag::TO | PennTag::MD) && is_base_verb(&lower) => PennTag::VB,
            PennTag::NN if matches!(prev_word.as_str(), "i" | "you" | "we" | "they") && is_base_verb(&lower) => {
                PennTag::VBP
            }
            PennTag::NNS if matches!(prev_word.as_str(), "he" | "she" | "it") && is_verb_s_form(&lower) => {
                PennTag::VBZ
            }
            PennTag::NNS
                if matches!(prev, PennTag::NN | PennTag::NNP)
                    && matches!(
                        next,
                        Some(PennTag::DT | PennTag::PRP | PennTag::PRPS | PennTag::TO | PennTag::RP)
                    )
                    && is_verb_s_form(&lower) =>
            {
                PennTag::VBZ
            }
            PennTag::VBG if matches!(prev, PennTag::DT | PennTag::PRPS) => PennTag::NN,
            PennTag::VBD if has_aux_before(tokens, tags, i) => PennTag::VBN,
            tag => tag,
        };
        tags[i] = retagged;
    }
}

/// `has started`, `was quickly removed`
fn has_aux_before(tokens: &[String], tags: &[PennTag], i: usize) -> bool {
    if is_aux(&fold(&tokens[i - 1])) {
        return true;
    }
    i >= 2 && tags[i - 1] == PennTag::RB && is_aux(&fold(&tokens[i - 2]))
}
