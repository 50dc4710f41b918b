//! Rule-based English lemmatization
//!
//! Nouns are singularized, verbs are reduced to their base form. Both use an
//! irregular-form table first and fall back to suffix rules. Proper nouns keep
//! their surface form.

use crate::types::PosTag;

/// Base forms the verb rules recognise
pub(crate) const BASE_VERBS: &[&str] = &[
    "add", "affect", "aim", "allow", "analyse", "analyze", "appear", "apply", "ask",
    "associate", "be", "become", "begin", "believe", "bring", "build", "buy", "call",
    "change", "choose", "classify", "come", "compute", "consider", "contain", "continue",
    "create", "decide", "define", "depend", "describe", "design", "detect", "develop", "die",
    "do", "enable", "ensure", "expect", "explain", "extract", "fall", "feel", "find", "focus",
    "follow", "generate", "get", "give", "go", "grow", "happen", "have", "hear", "help",
    "identify", "implement", "improve", "include", "involve", "keep", "know", "lead",
    "learn", "leave", "let", "live", "look", "lose", "love", "make", "mean", "meet", "mimic",
    "move", "need", "offer", "open", "pay", "perform", "plan", "play", "predict", "process",
    "produce", "program", "provide", "pull", "put", "raise", "reach", "read", "reason",
    "recognize", "reduce", "remain", "remember", "report", "represent", "require", "run",
    "say", "see", "seem", "sell", "send", "serve", "set", "show", "simulate", "sit", "solve",
    "speak", "specialize", "spend", "stand", "start", "stay", "stop", "study", "suggest",
    "support", "take", "talk", "teach", "tell", "think", "train", "transform", "try", "turn",
    "understand", "use", "wait", "walk", "want", "watch", "win", "work", "write",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("went", "go"), ("gone", "go"),
    ("goes", "go"), ("became", "become"), ("made", "make"), ("ran", "run"), ("took", "take"),
    ("taken", "take"), ("gave", "give"), ("given", "give"), ("found", "find"),
    ("knew", "know"), ("known", "know"), ("thought", "think"), ("saw", "see"),
    ("seen", "see"), ("came", "come"), ("got", "get"), ("gotten", "get"), ("led", "lead"),
    ("built", "build"), ("brought", "bring"), ("wrote", "write"), ("written", "write"),
    ("taught", "teach"), ("kept", "keep"), ("left", "leave"), ("lost", "lose"),
    ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("sold", "sell"), ("sent", "send"),
    ("spent", "spend"), ("stood", "stand"), ("understood", "understand"), ("won", "win"),
    ("began", "begin"), ("begun", "begin"), ("grew", "grow"), ("grown", "grow"),
    ("shown", "show"), ("said", "say"), ("told", "tell"), ("chose", "choose"),
    ("chosen", "choose"), ("fell", "fall"), ("felt", "feel"), ("heard", "hear"),
    ("spoke", "speak"), ("spoken", "speak"), ("sat", "sit"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("people", "person"),
    ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
    ("criteria", "criterion"), ("phenomena", "phenomenon"), ("analyses", "analysis"),
    ("indices", "index"), ("matrices", "matrix"), ("knives", "knife"), ("lives", "life"),
    ("wives", "wife"), ("leaves", "leaf"), ("halves", "half"), ("wolves", "wolf"),
    ("shelves", "shelf"), ("selves", "self"), ("heroes", "hero"), ("potatoes", "potato"),
    ("tomatoes", "tomato"), ("echoes", "echo"), ("movies", "movie"), ("cookies", "cookie"),
    ("pies", "pie"), ("ties", "tie"), ("lies", "lie"), ("calories", "calorie"),
];

/// Nouns whose trailing `s` is not a plural marker
const INVARIANT_NOUNS: &[&str] = &[
    "news", "physics", "mathematics", "economics", "politics", "ethics", "statistics",
    "linguistics", "robotics", "series", "species", "means", "lens", "gas", "chaos", "bias",
    "atlas", "canvas", "alias", "data",
];

/// Lemmatize a word given its POS tag
pub fn lemmatize(word: &str, pos: PosTag) -> String {
    let word = strip_possessive(word);
    match pos {
        PosTag::ProperNoun => word.to_string(),
        PosTag::Noun => singularize(&word.to_lowercase()),
        PosTag::Verb => verb_lemma(&word.to_lowercase()),
        _ => word.to_lowercase(),
    }
}

/// Base form of a verb, when the word is a form of a known verb
pub(crate) fn known_verb_lemma(word: &str) -> Option<String> {
    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == word) {
        return Some((*base).to_string());
    }
    verb_candidates(word)
        .into_iter()
        .find(|candidate| BASE_VERBS.contains(&candidate.as_str()))
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(word)
}

fn singularize(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_NOUNS.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }

    if INVARIANT_NOUNS.contains(&word)
        || word.len() <= 3
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return format!("{stem}y");
        }
    }

    for sibilant in ["sses", "ches", "shes", "xes", "zzes"] {
        if word.ends_with(sibilant) {
            return word[..word.len() - 2].to_string();
        }
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn verb_lemma(word: &str) -> String {
    if let Some(base) = known_verb_lemma(word) {
        return base;
    }

    // Unknown verb: take the most plausible candidate from the suffix rules.
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= 2 {
            return undouble(stem).unwrap_or_else(|| stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 2 {
            return undouble(stem).unwrap_or_else(|| stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ends_with_sibilant(stem) {
            return stem.to_string();
        }
    }
    if !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Every base form a suffix rule could produce, most likely first
fn verb_candidates(word: &str) -> Vec<String> {
    let mut candidates = vec![word.to_string()];

    if let Some(stem) = word.strip_suffix("ing") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
        candidates.extend(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        candidates.push(word[..word.len() - 1].to_string());
        candidates.push(stem.to_string());
        candidates.extend(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        candidates.push(stem.to_string());
    }

    candidates
}

/// "runn" -> "run", "plann" -> "plan"; `None` when there is no doubled consonant
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    let doubled = last == before
        && last.is_ascii_alphabetic()
        && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's' | 'z');
    doubled.then(|| stem[..stem.len() - last.len_utf8()].to_string())
}

fn ends_with_sibilant(stem: &str) -> bool {
    ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| stem.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_plurals() {
        assert_eq!(lemmatize("machines", PosTag::Noun), "machine");
        assert_eq!(lemmatize("computers", PosTag::Noun), "computer");
        assert_eq!(lemmatize("industries", PosTag::Noun), "industry");
        assert_eq!(lemmatize("processes", PosTag::Noun), "process");
        assert_eq!(lemmatize("children", PosTag::Noun), "child");
        assert_eq!(lemmatize("Systems", PosTag::Noun), "system");
    }

    #[test]
    fn test_noun_singulars_untouched() {
        assert_eq!(lemmatize("intelligence", PosTag::Noun), "intelligence");
        assert_eq!(lemmatize("analysis", PosTag::Noun), "analysis");
        assert_eq!(lemmatize("focus", PosTag::Noun), "focus");
        assert_eq!(lemmatize("data", PosTag::Noun), "data");
        assert_eq!(lemmatize("class", PosTag::Noun), "class");
        assert_eq!(lemmatize("ai", PosTag::Noun), "ai");
    }

    #[test]
    fn test_verb_forms() {
        assert_eq!(lemmatize("running", PosTag::Verb), "run");
        assert_eq!(lemmatize("creating", PosTag::Verb), "create");
        assert_eq!(lemmatize("associated", PosTag::Verb), "associate");
        assert_eq!(lemmatize("planned", PosTag::Verb), "plan");
        assert_eq!(lemmatize("focuses", PosTag::Verb), "focus");
        assert_eq!(lemmatize("helps", PosTag::Verb), "help");
        assert_eq!(lemmatize("is", PosTag::Verb), "be");
        assert_eq!(lemmatize("became", PosTag::Verb), "become");
    }

    #[test]
    fn test_unknown_verb_suffix_rules() {
        assert_eq!(lemmatize("jogging", PosTag::Verb), "jog");
        assert_eq!(lemmatize("hacked", PosTag::Verb), "hack");
        assert_eq!(lemmatize("copied", PosTag::Verb), "copy");
        assert_eq!(lemmatize("fixes", PosTag::Verb), "fix");
        assert_eq!(lemmatize("failed", PosTag::Verb), "fail");
    }

    #[test]
    fn test_proper_nouns_keep_surface_form() {
        assert_eq!(lemmatize("NLP", PosTag::ProperNoun), "NLP");
        assert_eq!(lemmatize("Google's", PosTag::ProperNoun), "Google");
    }

    #[test]
    fn test_bare_clitic_is_kept() {
        assert_eq!(lemmatize("'s", PosTag::Particle), "'s");
        assert_eq!(lemmatize("\u{2019}s", PosTag::Particle), "\u{2019}s");
    }

    #[test]
    fn test_known_verb_lemma() {
        assert_eq!(known_verb_lemma("learns").as_deref(), Some("learn"));
        assert_eq!(known_verb_lemma("specialized").as_deref(), Some("specialize"));
        assert_eq!(known_verb_lemma("solving").as_deref(), Some("solve"));
        assert_eq!(known_verb_lemma("intelligence"), None);
        assert_eq!(known_verb_lemma("machines"), None);
    }
}
