//! Heuristic part-of-speech tagging
//!
//! Tags one sentence at a time, left to right. Closed-class words come from
//! fixed lists; open-class words are resolved with a verb lexicon plus the
//! previous tag, adjective suffixes and capitalization. Anything left over is
//! a common noun.

use crate::nlp::lemmatizer::known_verb_lemma;
use crate::nlp::tokenizer::is_possessive_clitic;
use crate::types::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "no", "every", "each", "either", "neither", "another", "such",
    "all", "both",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours",
    "hers", "ours", "theirs", "who", "whom", "that", "which", "what", "something",
    "anything", "nothing", "everything", "someone", "anyone", "everyone", "nobody",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "over",
    "under", "than", "as", "like", "per", "via", "within", "without", "across", "along",
    "among", "around", "behind", "beside", "beyond", "despite", "toward", "towards", "upon",
    "onto", "off", "out", "near", "since", "until",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "if", "unless", "whether", "when", "where",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "having",
    "do", "does", "did", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must",
];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "only", "then", "there", "here", "now", "always",
    "never", "often", "sometimes", "really", "quite", "rather", "almost", "already",
    "still", "even", "ever", "again", "soon", "well", "how", "why",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "wow", "hey", "hello", "yes", "ok", "okay"];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "hundred", "thousand", "million", "billion",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "great", "high", "low", "large", "small", "big", "long",
    "short", "important", "different", "same", "early", "late", "young", "public",
    "private", "able", "certain", "human", "intelligent", "various", "several", "many",
    "much", "few", "other", "own", "main", "major", "key", "common", "specific", "special",
    "simple", "complex", "modern", "recent", "current", "whole", "real", "true", "false",
    "full", "free", "clear", "hard", "easy", "strong", "weak", "deep", "rich", "poor",
    "likely", "similar", "first", "last", "next", "best", "better", "worse", "worst",
    "single", "multiple", "smart", "efficient", "relevant", "fast", "slow",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ical", "al", "ic", "ive", "ous", "ful", "less", "able", "ible",
];

/// Words matching an adjective suffix that are nouns
const SUFFIX_NOUNS: &[&str] = &[
    "animal", "signal", "proposal", "capital", "journal", "material", "hospital",
    "festival", "approval", "arrival", "survival", "interval", "terminal", "tutorial",
    "manual", "portal", "principal", "rival", "total", "metal", "crystal", "ritual",
    "individual", "removal", "renewal", "disposal", "trial", "denial", "mammal", "medal",
    "logic", "music", "topic", "republic", "traffic", "clinic", "mechanic", "panic",
    "fabric", "magic", "critic", "rhetoric", "arithmetic", "objective", "initiative",
    "detective", "executive", "motive", "archive", "alternative", "perspective",
    "incentive", "narrative", "representative", "table", "cable", "vegetable", "variable",
    "timetable", "bible", "handful",
];

/// `-ly` words that are not adverbs
const LY_NON_ADVERBS: &[&str] = &[
    "family", "supply", "assembly", "reply", "anomaly", "monopoly", "butterfly", "fly",
    "july", "italy", "ally", "belly", "jelly", "rally", "friendly", "lovely", "ugly",
    "costly", "daily", "weekly", "monthly", "yearly", "elderly", "lonely", "silly", "holy",
];

/// `-ed` words that are not past-tense verbs
const ED_NON_VERBS: &[&str] = &[
    "hundred", "kindred", "sacred", "naked", "wicked", "ragged", "rugged", "wretched",
    "beloved", "crooked",
];

/// Rule-based POS tagger for English
#[derive(Debug, Clone, Copy, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag the words of one sentence
    pub fn tag_sentence(&self, words: &[&str]) -> Vec<PosTag> {
        let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            // A possessive marks the next word as the head of a noun phrase.
            let prev = i.checked_sub(1).map(|j| {
                if is_possessive_clitic(words[j]) {
                    PosTag::Determiner
                } else {
                    tags[j]
                }
            });
            tags.push(tag_word(word, i == 0, prev));
        }
        tags
    }
}

fn tag_word(word: &str, sentence_initial: bool, prev: Option<PosTag>) -> PosTag {
    if !word.chars().any(char::is_alphanumeric) {
        return punctuation_tag(word);
    }

    if is_possessive_clitic(word) {
        return PosTag::Particle;
    }

    let lowered = word.to_lowercase();
    let lower = lowered
        .strip_suffix("'s")
        .or_else(|| lowered.strip_suffix("\u{2019}s"))
        .unwrap_or(lowered.as_str());

    if is_number(lower) || NUMBER_WORDS.contains(&lower) {
        return PosTag::Numeral;
    }
    if let Some(tag) = closed_class(lower) {
        return tag;
    }

    if is_acronym(word) || (!sentence_initial && starts_uppercase(word)) {
        return PosTag::ProperNoun;
    }

    if known_verb_lemma(lower).is_some() {
        return verb_or_noun(lower, prev);
    }

    if is_past_tense_after_subject(lower, prev) {
        return PosTag::Verb;
    }

    if is_adjective(lower) {
        return PosTag::Adjective;
    }

    if lower.len() > 3 && lower.ends_with("ly") && !LY_NON_ADVERBS.contains(&lower) {
        return PosTag::Adverb;
    }

    PosTag::Noun
}

fn closed_class(lower: &str) -> Option<PosTag> {
    if lower == "to" {
        return Some(PosTag::Particle);
    }
    let lists: [(&[&str], PosTag); 7] = [
        (DETERMINERS, PosTag::Determiner),
        (PRONOUNS, PosTag::Pronoun),
        (PREPOSITIONS, PosTag::Preposition),
        (CONJUNCTIONS, PosTag::Conjunction),
        (AUXILIARIES, PosTag::Verb),
        (INTERJECTIONS, PosTag::Interjection),
        (ADVERBS, PosTag::Adverb),
    ];
    lists
        .iter()
        .find(|(list, _)| list.contains(&lower))
        .map(|(_, tag)| *tag)
}

/// Words in the verb lexicon are often nouns too; the previous tag decides
fn verb_or_noun(lower: &str, prev: Option<PosTag>) -> PosTag {
    if lower.ends_with("ing") {
        // "include programming" vs "problem solving", "knowledge, reasoning"
        return match prev {
            Some(PosTag::Verb | PosTag::Particle | PosTag::Pronoun | PosTag::Adverb) => {
                PosTag::Verb
            }
            _ => PosTag::Noun,
        };
    }
    match prev {
        Some(
            PosTag::Determiner | PosTag::Adjective | PosTag::Numeral | PosTag::Preposition,
        ) => PosTag::Noun,
        _ => PosTag::Verb,
    }
}

/// Unknown `-ed` word following a noun or pronoun: "the sensor failed"
fn is_past_tense_after_subject(lower: &str, prev: Option<PosTag>) -> bool {
    matches!(
        prev,
        Some(PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
    ) && lower.len() > 4
        && lower.ends_with("ed")
        && !lower.ends_with("eed")
        && !ED_NON_VERBS.contains(&lower)
}

fn is_adjective(lower: &str) -> bool {
    if ADJECTIVES.contains(&lower) {
        return true;
    }
    lower.chars().count() >= 6
        && !SUFFIX_NOUNS.contains(&lower)
        && ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix))
}

fn punctuation_tag(word: &str) -> PosTag {
    const PUNCT: &str = ".,;:!?()[]{}\"'-\u{2013}\u{2014}\u{2026}\u{2018}\u{2019}\u{201c}\u{201d}/";
    if word.chars().all(|c| PUNCT.contains(c)) {
        PosTag::Punctuation
    } else {
        PosTag::Symbol
    }
}

fn is_number(lower: &str) -> bool {
    lower.chars().any(|c| c.is_ascii_digit())
        && lower
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%'))
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
