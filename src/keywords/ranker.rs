//! Frequency-based keyword ranking
//!
//! Keywords are the most frequent lemmas among alphabetic, non-stopword tokens
//! whose POS tag is in the accepted set (common and proper nouns by default).
//! The text is lowercased before analysis so that lemmas do not depend on the
//! input's casing.

use crate::nlp::analyzer::Analyzer;
use crate::types::{Document, MindMapConfig, PosTag, DEFAULT_RANK_COUNT};
use rustc_hash::FxHashMap;

/// Ranks lemmas by frequency
#[derive(Debug, Clone)]
pub struct KeywordRanker {
    /// POS tags whose lemmas are counted
    include_pos: Vec<PosTag>,
}

impl Default for KeywordRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordRanker {
    /// Create a ranker counting common and proper nouns
    pub fn new() -> Self {
        Self {
            include_pos: vec![PosTag::Noun, PosTag::ProperNoun],
        }
    }

    /// Create a ranker with the POS tags of a config
    pub fn from_config(config: &MindMapConfig) -> Self {
        Self::new().with_include_pos(config.include_pos.clone())
    }

    /// Set the accepted POS tags
    pub fn with_include_pos(mut self, include_pos: Vec<PosTag>) -> Self {
        self.include_pos = include_pos;
        self
    }

    /// Accepted POS tags
    pub fn include_pos(&self) -> &[PosTag] {
        &self.include_pos
    }

    /// Top `count` keywords of `text`
    ///
    /// Fewer are returned when fewer distinct lemmas qualify.
    pub fn rank<A: Analyzer + ?Sized>(&self, analyzer: &A, text: &str, count: usize) -> Vec<String> {
        let doc = analyzer.analyze(&text.to_lowercase());
        self.rank_document(&doc, count)
    }

    /// [`rank`](Self::rank) with the default count of 5
    pub fn rank_default<A: Analyzer + ?Sized>(&self, analyzer: &A, text: &str) -> Vec<String> {
        self.rank(analyzer, text, DEFAULT_RANK_COUNT)
    }

    /// Top `count` keywords of an already analysed document
    pub fn rank_document(&self, doc: &Document, count: usize) -> Vec<String> {
        let mut frequencies = self.lemma_frequencies(doc);
        // Stable sort keeps first-occurrence order among equal counts.
        frequencies.sort_by(|a, b| b.1.cmp(&a.1));
        frequencies
            .into_iter()
            .take(count)
            .map(|(lemma, _)| lemma)
            .collect()
    }

    /// Qualifying lemmas with their counts, in first-occurrence order
    pub fn lemma_frequencies(&self, doc: &Document) -> Vec<(String, usize)> {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut frequencies: Vec<(String, usize)> = Vec::new();

        for token in doc
            .tokens
            .iter()
            .filter(|t| t.is_keyword_candidate(&self.include_pos))
        {
            match index.get(token.lemma.as_str()) {
                Some(&i) => frequencies[i].1 += 1,
                None => {
                    index.insert(token.lemma.as_str(), frequencies.len());
                    frequencies.push((token.lemma.clone(), 1));
                }
            }
        }

        frequencies
    }
}
