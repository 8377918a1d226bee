//! Part-of-speech vocabulary.
//!
//! Taggers emit Penn Treebank labels. Only five of them can become tags,
//! see [`PartOfSpeech`].

use std::fmt;

/// Penn Treebank part-of-speech labels.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PennTag {
    CC,
    CD,
    DT,
    EX,
    FW,
    IN,
    JJ,
    JJR,
    JJS,
    LS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    PDT,
    POS,
    PRP,
    /// `PRP$`
    PRPS,
    RB,
    RBR,
    RBS,
    RP,
    SYM,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    /// `WP$`
    WPS,
    WRB,
    /// Any punctuation token.
    Punct,
}

impl PennTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PennTag::CC => "CC",
            PennTag::CD => "CD",
            PennTag::DT => "DT",
            PennTag::EX => "EX",
            PennTag::FW => "FW",
            PennTag::IN => "IN",
            PennTag::JJ => "JJ",
            PennTag::JJR => "JJR",
            PennTag::JJS => "JJS",
            PennTag::LS => "LS",
            PennTag::MD => "MD",
            PennTag::NN => "NN",
            PennTag::NNS => "NNS",
            PennTag::NNP => "NNP",
            PennTag::NNPS => "NNPS",
            PennTag::PDT => "PDT",
            PennTag::POS => "POS",
            PennTag::PRP => "PRP",
            PennTag::PRPS => "PRP$",
            PennTag::RB => "RB",
            PennTag::RBR => "RBR",
            PennTag::RBS => "RBS",
            PennTag::RP => "RP",
            PennTag::SYM => "SYM",
            PennTag::TO => "TO",
            PennTag::UH => "UH",
            PennTag::VB => "VB",
            PennTag::VBD => "VBD",
            PennTag::VBG => "VBG",
            PennTag::VBN => "VBN",
            PennTag::VBP => "VBP",
            PennTag::VBZ => "VBZ",
            PennTag::WDT => "WDT",
            PennTag::WP => "WP",
            PennTag::WPS => "WP$",
            PennTag::WRB => "WRB",
            PennTag::Punct => ".",
        }
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of speech that may become tags.
///
/// Variants are declared in title priority order, so the derived `Ord`
/// ranks proper plural nouns first and superlative adjectives last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    /// NNPS
    ProperNounPlural,
    /// NNP
    ProperNounSingular,
    /// NNS
    NounPlural,
    /// NN
    NounSingular,
    /// JJS
    SuperlativeAdjective,
}

impl PartOfSpeech {
    /// The allow-list filter: `Some` only for NN, NNS, NNP, NNPS and JJS.
    pub fn from_penn(tag: PennTag) -> Option<Self> {
        match tag {
            PennTag::NNPS => Some(PartOfSpeech::ProperNounPlural),
            PennTag::NNP => Some(PartOfSpeech::ProperNounSingular),
            PennTag::NNS => Some(PartOfSpeech::NounPlural),
            PennTag::NN => Some(PartOfSpeech::NounSingular),
            PennTag::JJS => Some(PartOfSpeech::SuperlativeAdjective),
            _ => None,
        }
    }

    pub fn penn(self) -> PennTag {
        match self {
            PartOfSpeech::ProperNounPlural => PennTag::NNPS,
            PartOfSpeech::ProperNounSingular => PennTag::NNP,
            PartOfSpeech::NounPlural => PennTag::NNS,
            PartOfSpeech::NounSingular => PennTag::NN,
            PartOfSpeech::SuperlativeAdjective => PennTag::JJS,
        }
    }
}

/// A normalized word that survived the part-of-speech filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    /// Lowercase, purely alphabetic, shorter than 21 characters.
    pub word: String,
    pub part_of_speech: PartOfSpeech,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        Self { word: word.into(), part_of_speech }
    }
}

/// A part-of-speech tagger over an already tokenized sentence stream.
///
/// Implementations must return exactly one label per token and must be
/// deterministic. Capitalisation of the tokens is meaningful.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<PennTag>;
}
