//! Keyword evidence grouping
//!
//! Sentences are scanned in document order. For every keyword a sentence
//! mentions, its noun phrases containing the keyword become evidence, up to
//! `max_per_keyword` entries. When none is added the whole sentence is used
//! instead. No text (compared case-insensitively) is emitted twice.
//!
//! The sentence fallback is not limited by `max_per_keyword`: a keyword that
//! already reached its cap still receives every unused sentence mentioning it.
//!
//! All mutable state lives in a [`GroupingState`] that is threaded through
//! [`EvidenceGrouper::step`], one sentence at a time.

use crate::nlp::analyzer::Analyzer;
use crate::types::{Document, MindMapConfig, Sentence, DEFAULT_MAX_PER_KEYWORD};
use rustc_hash::FxHashSet;
use serde::ser::{Serialize, Serializer};

// ============================================================================
// EvidenceMap
// ============================================================================

/// Evidence collected for one keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEvidence {
    pub keyword: String,
    /// Phrases or sentences, in document order
    pub evidence: Vec<String>,
}

/// Keyword → evidence, ordered by when each keyword first received evidence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceMap {
    entries: Vec<KeywordEvidence>,
}

impl EvidenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evidence for a keyword, if it has any
    pub fn get(&self, keyword: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.evidence.as_slice())
    }

    /// Number of evidence entries recorded for a keyword
    pub fn count(&self, keyword: &str) -> usize {
        self.get(keyword).map_or(0, <[String]>::len)
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Keywords in insertion order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// (keyword, evidence) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.keyword.as_str(), e.evidence.as_slice()))
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total evidence entries across all keywords
    pub fn total_evidence(&self) -> usize {
        self.entries.iter().map(|e| e.evidence.len()).sum()
    }

    fn push(&mut self, keyword: &str, text: &str) {
        match self.entries.iter_mut().find(|e| e.keyword == keyword) {
            Some(entry) => entry.evidence.push(text.to_string()),
            None => self.entries.push(KeywordEvidence {
                keyword: keyword.to_string(),
                evidence: vec![text.to_string()],
            }),
        }
    }
}

impl Serialize for EvidenceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ============================================================================
// Grouping state
// ============================================================================

/// Lowercased texts already emitted as evidence
#[derive(Debug, Clone, Default)]
pub struct UsedTextSet {
    texts: FxHashSet<String>,
}

impl UsedTextSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, text: &str) -> bool {
        self.texts.contains(&text.to_lowercase())
    }

    /// Record a text; returns `false` if it was already present
    pub fn mark(&mut self, text: &str) -> bool {
        self.texts.insert(text.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Accumulator threaded through one grouping run
#[derive(Debug, Clone, Default)]
pub struct GroupingState {
    evidence: EvidenceMap,
    used: UsedTextSet,
}

impl GroupingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evidence(&self) -> &EvidenceMap {
        &self.evidence
    }

    pub fn used(&self) -> &UsedTextSet {
        &self.used
    }

    /// Finish the run, dropping the used-text set
    pub fn into_evidence(self) -> EvidenceMap {
        self.evidence
    }
}

/// The parts of a sentence the grouper looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceEvidence<'a> {
    /// Trimmed sentence text, original casing
    pub text: &'a str,
    /// Trimmed noun phrase texts, left to right
    pub phrases: Vec<&'a str>,
}

impl<'a> SentenceEvidence<'a> {
    pub fn new(text: &'a str, phrases: Vec<&'a str>) -> Self {
        Self {
            text: text.trim(),
            phrases: phrases.into_iter().map(str::trim).collect(),
        }
    }

    pub fn from_document(doc: &'a Document, sentence: &'a Sentence) -> Self {
        Self {
            text: sentence.trimmed(),
            phrases: doc.noun_phrases(sentence),
        }
    }
}

// ============================================================================
// EvidenceGrouper
// ============================================================================

/// Groups noun phrase / sentence evidence under keywords
#[derive(Debug, Clone)]
pub struct EvidenceGrouper {
    max_per_keyword: usize,
}

impl Default for EvidenceGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_KEYWORD)
    }
}

impl EvidenceGrouper {
    /// Create a grouper with the given phrase cap per keyword
    pub fn new(max_per_keyword: usize) -> Self {
        Self { max_per_keyword }
    }

    pub fn from_config(config: &MindMapConfig) -> Self {
        Self::new(config.max_per_keyword)
    }

    pub fn max_per_keyword(&self) -> usize {
        self.max_per_keyword
    }

    /// Analyse `text` (original casing) and group evidence for `keywords`
    ///
    /// Keywords are matched as lowercase substrings of each sentence.
    pub fn group<A, S>(&self, analyzer: &A, text: &str, keywords: &[S]) -> EvidenceMap
    where
        A: Analyzer + ?Sized,
        S: AsRef<str>,
    {
        let doc = analyzer.analyze(text);
        self.group_document(&doc, keywords)
    }

    /// Group evidence over an analysed document
    pub fn group_document<S: AsRef<str>>(&self, doc: &Document, keywords: &[S]) -> EvidenceMap {
        let state = doc
            .sentences
            .iter()
            .fold(GroupingState::new(), |state, sentence| {
                self.step(state, &SentenceEvidence::from_document(doc, sentence), keywords)
            });

        tracing::debug!(
            keywords = state.evidence.len(),
            evidence = state.evidence.total_evidence(),
            used = state.used.len(),
            "grouped evidence"
        );

        state.into_evidence()
    }

    /// Process one sentence for every keyword, in keyword order
    pub fn step<S: AsRef<str>>(
        &self,
        mut state: GroupingState,
        sentence: &SentenceEvidence<'_>,
        keywords: &[S],
    ) -> GroupingState {
        let sentence_lower = sentence.text.to_lowercase();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            if !sentence_lower.contains(keyword) {
                continue;
            }

            let mut phrases_added = 0;
            for phrase in &sentence.phrases {
                if state.evidence.count(keyword) >= self.max_per_keyword {
                    break;
                }
                if phrase.to_lowercase().contains(keyword) && !state.used.contains(phrase) {
                    state.evidence.push(keyword, phrase);
                    state.used.mark(phrase);
                    phrases_added += 1;
                }
            }

            // Not gated by max_per_keyword.
            if phrases_added == 0 && !state.used.contains(&sentence_lower) {
                state.evidence.push(keyword, sentence.text);
                state.used.mark(&sentence_lower);
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::ranker::KeywordRanker;
    use crate::nlp::analyzer::RuleBasedAnalyzer;
    use crate::types::EXAMPLE_TEXT;

    fn run(grouper: &EvidenceGrouper, sentences: &[SentenceEvidence<'_>], keywords: &[&str]) -> EvidenceMap {
        sentences
            .iter()
            .fold(GroupingState::new(), |state, s| grouper.step(state, s, keywords))
            .into_evidence()
    }

    #[test]
    fn test_phrases_preferred_over_sentence() {
        let s = SentenceEvidence::new(
            "Machine learning needs data.",
            vec!["Machine learning", "data"],
        );
        let map = run(&EvidenceGrouper::default(), &[s], &["learning"]);

        assert_eq!(map.get("learning"), Some(&["Machine learning".to_string()][..]));
    }

    #[test]
    fn test_sentence_fallback_when_no_phrase_matches() {
        let s = SentenceEvidence::new("  Systems learn from data.  ", vec!["Systems", "data"]);
        let map = run(&EvidenceGrouper::default(), &[s], &["learn"]);

        assert_eq!(
            map.get("learn"),
            Some(&["Systems learn from data.".to_string()][..])
        );
    }

    #[test]
    fn test_phrase_shared_by_keywords_is_used_once() {
        let s = SentenceEvidence::new("Machine learning rocks.", vec!["Machine learning"]);
        let map = run(&EvidenceGrouper::default(), &[s], &["machine", "learning"]);

        assert_eq!(map.get("machine"), Some(&["Machine learning".to_string()][..]));
        // The phrase is taken, so "learning" falls back to the sentence.
        assert_eq!(
            map.get("learning"),
            Some(&["Machine learning rocks.".to_string()][..])
        );
    }

    #[test]
    fn test_sentence_fallback_used_once() {
        let s = SentenceEvidence::new("It runs and jumps.", vec![]);
        let map = run(&EvidenceGrouper::default(), &[s], &["runs", "jumps"]);

        assert_eq!(map.get("runs").map(<[String]>::len), Some(1));
        assert!(!map.contains_keyword("jumps"));
    }

    #[test]
    fn test_case_insensitive_dedup_across_sentences() {
        let sentences = [
            SentenceEvidence::new("Data science grows.", vec!["Data science"]),
            SentenceEvidence::new("We love data science.", vec!["We", "data science"]),
        ];
        let map = run(&EvidenceGrouper::default(), &sentences, &["science"]);

        assert_eq!(
            map.get("science").unwrap(),
            &["Data science".to_string(), "We love data science.".to_string()]
        );
    }

    #[test]
    fn test_phrase_cap_within_sentence() {
        let s = SentenceEvidence::new(
            "Graph nodes, graph edges and graph weights.",
            vec!["Graph nodes", "graph edges", "graph weights"],
        );
        let map = run(&EvidenceGrouper::new(2), &[s], &["graph"]);

        assert_eq!(
            map.get("graph").unwrap(),
            &["Graph nodes".to_string(), "graph edges".to_string()]
        );
    }

    #[test]
    fn test_fallback_sentence_ignores_cap() {
        let sentences = [
            SentenceEvidence::new("Data science grows.", vec!["Data science"]),
            SentenceEvidence::new("Data helps.", vec!["Data"]),
        ];
        let map = run(&EvidenceGrouper::new(1), &sentences, &["data"]);

        // The cap blocks the phrase "Data", so the sentence is appended instead,
        // leaving two entries for a cap of one.
        assert_eq!(
            map.get("data").unwrap(),
            &["Data science".to_string(), "Data helps.".to_string()]
        );
    }

    #[test]
    fn test_absent_keyword_has_no_entry() {
        let s = SentenceEvidence::new("Cats sleep.", vec!["Cats"]);
        let map = run(&EvidenceGrouper::default(), &[s], &["dog"]);

        assert!(map.is_empty());
    }

    #[test]
    fn test_key_order_follows_first_evidence() {
        let sentences = [
            SentenceEvidence::new("Dogs bark.", vec!["Dogs"]),
            SentenceEvidence::new("Cats and dogs play.", vec!["Cats", "dogs"]),
        ];
        let map = run(&EvidenceGrouper::default(), &sentences, &["cat", "dog"]);

        assert_eq!(map.keywords().collect::<Vec<_>>(), vec!["dog", "cat"]);
    }

    #[test]
    fn test_step_exposes_intermediate_state() {
        let grouper = EvidenceGrouper::default();
        let s = SentenceEvidence::new("Robots move.", vec!["Robots"]);

        let state = grouper.step(GroupingState::new(), &s, &["robot"]);
        assert_eq!(state.evidence().count("robot"), 1);
        assert!(state.used().contains("ROBOTS"));
        assert!(!state.used().contains("robots move."));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let sentences = [
            SentenceEvidence::new("Zebras run.", vec!["Zebras"]),
            SentenceEvidence::new("Ants dig.", vec!["Ants"]),
        ];
        let map = run(&EvidenceGrouper::default(), &sentences, &["ant", "zebra"]);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zebra":["Zebras"],"ant":["Ants"]}"#);
    }

    #[test]
    fn test_example_paragraph_properties() {
        let analyzer = RuleBasedAnalyzer::default();
        let keywords = KeywordRanker::new().rank(&analyzer, EXAMPLE_TEXT, 6);
        let grouper = EvidenceGrouper::new(4);
        let map = grouper.group(&analyzer, EXAMPLE_TEXT, &keywords);

        let intelligence = map.get("intelligence").expect("intelligence has evidence");
        assert!(intelligence
            .iter()
            .any(|e| e.to_lowercase().contains("intelligence")));

        let doc = analyzer.analyze(EXAMPLE_TEXT);
        let mut seen = FxHashSet::default();
        for (keyword, evidence) in map.iter() {
            assert!(keywords.iter().any(|k| k == keyword));
            assert!(doc
                .sentences
                .iter()
                .any(|s| s.trimmed().to_lowercase().contains(keyword)));
            for entry in evidence {
                assert!(seen.insert(entry.to_lowercase()), "duplicate evidence {entry}");
            }
        }
    }

    #[test]
    fn test_empty_keywords_yield_empty_map() {
        let analyzer = RuleBasedAnalyzer::default();
        let keywords: Vec<String> = Vec::new();
        assert!(EvidenceGrouper::default()
            .group(&analyzer, EXAMPLE_TEXT, &keywords)
            .is_empty());
    }
}
