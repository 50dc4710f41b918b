//! Stopword filtering
//!
//! The English list comes from the `stop-words` crate, minus a few content
//! words it lists; callers may extend it with their own words through
//! [`MindMapConfig::stopwords`](crate::types::MindMapConfig).
//! The tagger and lemmatizer are English-only, so no other lists are loaded.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for flagging stopwords during analysis
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

/// Words on the `stop-words` English list that carry topic meaning
const CONTENT_WORDS: &[&str] = &["ai"];

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Create the English stopword filter
    pub fn new() -> Self {
        Self {
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .filter(|s| !CONTENT_WORDS.contains(&s.as_str()))
                .collect(),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Builder method: extend the list with additional words
    pub fn with_extra<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stopwords
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
