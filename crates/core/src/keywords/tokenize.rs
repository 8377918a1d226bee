//! Treebank-style word tokenizer.
//!
//! Whitespace separates chunks; punctuation is peeled off both edges of a
//! chunk and clitics (`'s`, `n't`, ...) become their own tokens. Periods,
//! commas, hyphens and apostrophes inside a chunk are kept, so `U.S.S.R`,
//! `4,956` and `one-tenth` stay whole.

/// Contraction suffixes split from their host word.
pub const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Split `text` into word and punctuation tokens, preserving case.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split(|c: char| c.is_whitespace() || c == '\u{2014}' || c == '\u{2013}') {
        for piece in chunk.split("--") {
            if !piece.is_empty() {
                split_chunk(piece, &mut tokens);
            }
        }
    }
    tokens
}

fn is_edge_punct(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c, '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}' | '\u{2026}' | '\u{ab}' | '\u{bb}')
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    let mut rest = chunk;

    loop {
        if is_bare_clitic(rest) {
            break;
        }
        if let Some(stripped) = rest.strip_prefix("...") {
            out.push("...".to_string());
            rest = stripped;
            continue;
        }
        match rest.chars().next() {
            Some(c) if is_edge_punct(c) => {
                out.push(c.to_string());
                rest = &rest[c.len_utf8()..];
            }
            _ => break,
        }
    }

    let mut trailing = Vec::new();
    loop {
        if let Some(stripped) = rest.strip_suffix("...") {
            trailing.push("...".to_string());
            rest = stripped;
            continue;
        }
        match rest.chars().next_back() {
            Some(c) if is_edge_punct(c) => {
                trailing.push(c.to_string());
                rest = &rest[..rest.len() - c.len_utf8()];
            }
            _ => break,
        }
    }

    if !rest.is_empty() {
        split_clitic(rest, out);
    }
    out.extend(trailing.into_iter().rev());
}

fn fold_apostrophes(word: &str) -> String {
    word.chars().map(|c| if c == '\u{2019}' { '\'' } else { c.to_ascii_lowercase() }).collect()
}

/// `'s`, `'re,` and friends written apart from their host word.
fn is_bare_clitic(chunk: &str) -> bool {
    let folded = fold_apostrophes(chunk);
    CLITICS
        .iter()
        .filter(|clitic| clitic.starts_with('\''))
        .any(|clitic| folded.strip_prefix(clitic).is_some_and(|tail| tail.chars().all(is_edge_punct)))
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    let folded = fold_apostrophes(word);

    for clitic in CLITICS {
        if folded.ends_with(clitic) {
            let total = word.chars().count();
            let keep = total - clitic.chars().count();
            if keep == 0 {
                break;
            }
            if let Some((idx, _)) = word.char_indices().nth(keep) {
                out.push(word[..idx].to_string());
                out.push(word[idx..].to_string());
                return;
            }
        }
    }

    out.push(word.to_string());
}
