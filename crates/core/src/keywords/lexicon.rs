//! Word lists backing [`LexiconTagger`](super::LexiconTagger).
//!
//! Lookups take lowercase input.

use super::pos::PennTag;

/// Function words and auxiliaries with a fixed label.
pub fn closed_class(word: &str) -> Option<PennTag> {
    let tag = match word {
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "some" | "any" | "no" | "every" | "each"
        | "another" | "either" | "neither" | "all" | "both" => PennTag::DT,
        "half" | "such" | "quite" => PennTag::PDT,
        "and" | "or" | "but" | "nor" | "yet" | "plus" | "&" => PennTag::CC,
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "into" | "onto" | "upon" | "about"
        | "above" | "across" | "after" | "against" | "along" | "among" | "around" | "before" | "behind"
        | "below" | "beneath" | "beside" | "between" | "beyond" | "during" | "except" | "inside" | "like"
        | "near" | "since" | "than" | "through" | "throughout" | "toward" | "towards" | "under"
        | "unlike" | "until" | "via" | "within" | "without" | "because" | "if" | "unless" | "while"
        | "although" | "though" | "whether" | "per" | "despite" | "amid" => PennTag::IN,
        "up" | "down" | "out" | "off" | "over" | "away" | "back" => PennTag::RP,
        "to" => PennTag::TO,
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them" | "myself"
        | "yourself" | "himself" | "herself" | "itself" | "ourselves" | "themselves" | "mine" | "yours"
        | "hers" | "ours" | "theirs" => PennTag::PRP,
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => PennTag::PRPS,
        "who" | "whom" | "what" => PennTag::WP,
        "whose" => PennTag::WPS,
        "which" | "whatever" | "whichever" => PennTag::WDT,
        "how" | "when" | "where" | "why" | "whenever" | "wherever" => PennTag::WRB,
        "there" => PennTag::EX,
        "can" | "could" | "may" | "might" | "must" | "shall" | "should" | "will" | "would" | "ca" | "wo"
        | "'ll" | "'d" => PennTag::MD,
        "be" => PennTag::VB,
        "am" | "are" | "'re" | "'m" | "'ve" | "have" | "do" => PennTag::VBP,
        "is" | "has" | "does" => PennTag::VBZ,
        "was" | "were" | "had" | "did" => PennTag::VBD,
        "been" | "done" => PennTag::VBN,
        "being" | "having" | "doing" => PennTag::VBG,
        "'s" => PennTag::POS,
        "n't" | "not" | "never" | "also" | "only" | "very" | "too" | "so" | "just" | "even" | "still"
        | "already" | "again" | "always" | "often" | "sometimes" | "usually" | "here" | "now" | "then"
        | "soon" | "today" | "tomorrow" | "yesterday" | "ever" | "perhaps" | "maybe" | "almost" | "enough"
        | "instead" | "rather" | "once" | "twice" | "together" | "however" | "thus" | "therefore"
        | "apart" | "else" | "ago" | "indeed" | "anyway" | "further" => PennTag::RB,
        "more" | "less" | "better" | "worse" | "later" | "earlier" => PennTag::RBR,
        "most" | "least" => PennTag::JJS,
        "oh" | "wow" | "hey" | "hello" | "yes" | "please" | "thanks" | "ok" | "okay" => PennTag::UH,
        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine" | "ten" | "eleven"
        | "twelve" | "twenty" | "thirty" | "forty" | "fifty" | "hundred" | "thousand" | "million"
        | "billion" | "zero" => PennTag::CD,
        "first" | "second" | "third" | "last" | "next" | "many" | "few" | "much" | "other" | "same"
        | "own" | "several" | "new" | "old" | "good" | "bad" | "great" | "little" | "big" | "small"
        | "large" | "long" | "short" | "high" | "low" | "young" | "early" | "late" | "important"
        | "different" | "possible" | "available" | "free" | "full" | "real" | "true" | "whole" | "able"
        | "sure" | "hard" | "easy" | "clear" | "recent" | "certain" | "major" | "main" | "public"
        | "private" | "local" | "national" | "social" | "political" | "human" | "common" | "current"
        | "special" | "similar" | "simple" | "single" | "strong" | "open" | "likely" | "final" | "total"
        | "various" | "huge" | "tiny" | "quick" | "slow" | "fast" | "hot" | "cold" | "warm" | "cool"
        | "dark" | "bright" | "happy" | "sad" | "nice" | "fine" | "safe" | "wide" | "deep" | "rich"
        | "poor" | "close" | "ready" | "official" | "global" | "digital" | "online"
        | "popular" | "original" | "personal" | "financial" | "federal" | "international" | "foreign"
        | "economic" | "military" | "medical" | "legal" | "black" | "white" | "red" | "blue" | "green" => {
            PennTag::JJ
        }
        "best" | "worst" | "biggest" | "largest" | "smallest" | "greatest" | "highest" | "lowest"
        | "longest" | "shortest" | "newest" | "oldest" | "latest" | "earliest" | "fastest" | "slowest"
        | "strongest" | "weakest" | "richest" | "poorest" | "youngest" | "finest" | "nearest" | "closest"
        | "cheapest" | "deepest" | "hardest" | "easiest" | "hottest" | "coldest" | "brightest"
        | "darkest" | "safest" | "widest" | "tallest" | "smartest" | "happiest" | "busiest" => PennTag::JJS,
        _ => return None,
    };
    Some(tag)
}

/// Base forms of common verbs.
pub fn is_base_verb(word: &str) -> bool {
    matches!(
        word,
        "make" | "take" | "get" | "go" | "see" | "know" | "think" | "come" | "give" | "find" | "tell"
            | "ask" | "use" | "try" | "leave" | "call" | "keep" | "let" | "begin" | "seem" | "help"
            | "show" | "hear" | "play" | "run" | "move" | "live" | "believe" | "bring" | "happen"
            | "write" | "sit" | "stand" | "lose" | "pay" | "meet" | "include" | "continue" | "set"
            | "learn" | "change" | "lead" | "understand" | "watch" | "follow" | "stop" | "create"
            | "speak" | "read" | "allow" | "add" | "spend" | "grow" | "win" | "offer" | "remember"
            | "love" | "consider" | "appear" | "buy" | "wait" | "serve" | "die" | "send" | "expect"
            | "build" | "stay" | "fall" | "cut" | "reach" | "kill" | "remain" | "suggest" | "raise"
            | "pass" | "sell" | "require" | "report" | "decide" | "pull" | "check" | "avoid" | "wrap"
            | "grab" | "want" | "need" | "feel" | "say" | "become" | "put" | "mean" | "look" | "work"
            | "turn" | "start" | "open" | "walk" | "talk" | "provide" | "hold" | "share"
            | "explain" | "join" | "prevent" | "protect" | "support" | "visit" | "return" | "receive"
            | "choose" | "drive" | "eat" | "drink" | "sleep" | "carry" | "break" | "catch" | "fight"
            | "agree" | "enjoy" | "improve" | "produce" | "reduce" | "remove" | "replace" | "release"
            | "announce" | "launch" | "download" | "install" | "update" | "sign" | "click" | "subscribe"
            | "simulate" | "scrape" | "tag" | "dare" | "slide" | "shed"
    )
}

/// Irregular simple past forms.
pub fn is_irregular_past(word: &str) -> bool {
    matches!(
        word,
        "said" | "made" | "went" | "took" | "came" | "saw" | "knew" | "got" | "gave" | "found" | "thought"
            | "told" | "became" | "left" | "felt" | "brought" | "began" | "kept" | "held" | "wrote"
            | "stood" | "heard" | "meant" | "met" | "ran" | "paid" | "sat" | "spoke" | "lay" | "led"
            | "grew" | "lost" | "fell" | "sent" | "built" | "understood" | "drew" | "broke" | "spent"
            | "rose" | "drove" | "bought" | "wore" | "chose" | "sold" | "won" | "caught" | "fought"
            | "taught" | "ate" | "slept" | "threw" | "flew" | "forgot" | "hid" | "shook" | "sang"
    )
}

/// Adjective stems that form regular superlatives (`great` -> `greatest`).
pub fn is_gradable_adjective(word: &str) -> bool {
    matches!(
        word,
        "great" | "high" | "low" | "long" | "short" | "new" | "old" | "young" | "strong" | "weak" | "fast"
            | "slow" | "near" | "cheap" | "rich" | "poor" | "deep" | "small" | "tall" | "hard" | "soft"
            | "quick" | "warm" | "cold" | "dark" | "bright" | "loud" | "clean" | "clear" | "kind" | "few"
            | "calm" | "smart" | "brave" | "grand" | "large" | "late" | "fine" | "close" | "wide" | "safe"
            | "nice" | "pure" | "rare" | "wise" | "simple" | "cute" | "strange" | "big" | "hot" | "fat"
            | "sad" | "thin" | "mad" | "wet" | "red" | "fit" | "dim" | "flat" | "full" | "cool" | "fresh"
            | "proud" | "sweet" | "sharp" | "thick" | "tough" | "wild" | "light" | "heavy" | "easy"
            | "happy" | "busy" | "early" | "funny" | "pretty" | "lucky" | "healthy" | "wealthy"
    )
}

/// Nouns whose suffix would otherwise suggest another class.
pub fn is_suffix_exception(word: &str) -> bool {
    matches!(
        word,
        "thing" | "king" | "ring" | "string" | "spring" | "wing" | "sing" | "bring" | "morning"
            | "evening" | "building" | "meeting" | "wedding" | "ceiling" | "clothing" | "everything"
            | "nothing" | "something" | "anything" | "feeling" | "painting" | "setting" | "training"
            | "family" | "supply" | "reply" | "apply" | "ally" | "rally" | "belly" | "jelly" | "bully"
            | "italy" | "july" | "assembly" | "anomaly" | "butterfly" | "need" | "seed" | "speed"
            | "bed" | "shed" | "red" | "hundred" | "feed" | "breed" | "greed" | "weed" | "creed"
            | "table" | "cable" | "fable" | "stable" | "bible" | "vegetable" | "archive" | "objective"
            | "executive" | "detective" | "motive" | "native" | "relative" | "representative"
            | "alternative" | "initiative" | "perspective" | "directive" | "incentive" | "interest"
            | "forest" | "request" | "contest" | "protest" | "harvest" | "honest" | "modest" | "test"
            | "chest" | "guest" | "nest" | "quest" | "rest" | "west" | "pest" | "vest" | "crest"
            | "arrest" | "digest" | "manifest" | "conquest" | "inquest" | "priest"
    )
}
