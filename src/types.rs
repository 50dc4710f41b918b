//! Core types for rapid_mindmap
//!
//! This module defines the fundamental data structures used throughout the library,
//! including tokens, sentences, noun chunks, analysed documents and configuration.

use crate::errors::{MindMapError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================

/// Number of keywords the ranker returns when called without a count
pub const DEFAULT_RANK_COUNT: usize = 5;

/// Evidence cap the grouper applies when called without one
pub const DEFAULT_MAX_PER_KEYWORD: usize = 5;

/// Number of keywords ranked by a full pipeline run
pub const DEFAULT_RUN_KEYWORDS: usize = 6;

/// Evidence cap applied by a full pipeline run
pub const DEFAULT_RUN_MAX_PER_KEYWORD: usize = 4;

/// Accepted values of [`MindMapConfig::language`]
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "english"];

/// Central topic label used when the caller supplies none
pub const DEFAULT_TOPIC: &str = "Artificial Intelligence";

/// Paragraph analysed when the user submits no text
pub const EXAMPLE_TEXT: &str = "Artificial Intelligence (AI) is a branch of computer science that aims to create intelligent machines. \nIt has become an essential part of the technology industry. Research associated with artificial intelligence is highly technical and specialized. \nThe core problems of AI include programming computers for certain traits such as knowledge, reasoning, problem solving, perception, learning, planning, and language processing.\nMachine learning is a subset of AI that focuses on the ability of systems to learn from data. Natural language processing (NLP) helps machines understand human language.";

// ============================================================================
// Token
// ============================================================================

/// Part-of-speech tags (Universal Dependencies coarse tag set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Preposition,
    #[serde(rename = "CCONJ")]
    Conjunction,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "X")]
    Other,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag may appear before the head of a noun phrase
    pub fn is_noun_modifier(&self) -> bool {
        matches!(self, PosTag::Adjective | PosTag::Numeral)
    }

    /// Get the Universal Dependencies tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// The lemmatized form (normalized)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Byte offset (start) in the analysed text
    pub start: usize,
    /// Byte offset (end) in the analysed text
    pub end: usize,
    /// Sentence index this token belongs to
    pub sentence_idx: usize,
    /// Token index within the document
    pub token_idx: usize,
    /// Whether the surface form consists of alphabetic characters only
    pub is_alpha: bool,
    /// Whether this token is a stopword
    pub is_stopword: bool,
}

impl Token {
    /// Create a new token
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            lemma: lemma.into(),
            pos,
            start,
            end,
            sentence_idx,
            token_idx,
            is_alpha,
            is_stopword: false,
        }
    }

    /// Builder method: mark the token as a stopword
    pub fn with_stopword(mut self, is_stopword: bool) -> Self {
        self.is_stopword = is_stopword;
        self
    }

    /// Check if this token may count towards keyword frequency
    pub fn is_keyword_candidate(&self, include_pos: &[PosTag]) -> bool {
        self.is_alpha && !self.is_stopword && include_pos.contains(&self.pos)
    }
}

// ============================================================================
// Chunk & Sentence
// ============================================================================

/// A span of text representing a noun chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpan {
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
    /// Start byte offset
    pub start_char: usize,
    /// End byte offset
    pub end_char: usize,
    /// The sentence this chunk belongs to
    pub sentence_idx: usize,
}

impl ChunkSpan {
    /// Get the token length of this chunk
    pub fn token_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, untrimmed
    pub text: String,
    /// Start byte offset in the analysed text
    pub start: usize,
    /// End byte offset in the analysed text
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
    /// Noun chunks in left-to-right order
    pub noun_chunks: Vec<ChunkSpan>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            start_token: 0,
            end_token: 0,
            noun_chunks: Vec::new(),
        }
    }

    /// The sentence text with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Analyzer output for one piece of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The analysed text, exactly as given to the analyzer
    pub text: String,
    /// All tokens in document order
    pub tokens: Vec<Token>,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Tokens belonging to a sentence
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.start_token..sentence.end_token]
    }

    /// Source text covered by a noun chunk, trimmed
    pub fn chunk_text(&self, chunk: &ChunkSpan) -> &str {
        self.text
            .get(chunk.start_char..chunk.end_char)
            .unwrap_or("")
            .trim()
    }

    /// Trimmed noun chunk texts of a sentence, left to right
    pub fn noun_phrases<'a>(&'a self, sentence: &'a Sentence) -> Vec<&'a str> {
        sentence
            .noun_chunks
            .iter()
            .map(|chunk| self.chunk_text(chunk))
            .collect()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a mind map run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindMapConfig {
    /// Number of keywords to rank
    pub num_keywords: usize,
    /// Maximum phrase evidence entries per keyword
    pub max_per_keyword: usize,
    /// Label of the central topic node
    pub topic: String,
    /// Language of the input; only English ("en") is supported
    pub language: String,
    /// POS tags whose lemmas count as keywords
    pub include_pos: Vec<PosTag>,
    /// Optional additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
}

impl Default for MindMapConfig {
    fn default() -> Self {
        Self {
            num_keywords: DEFAULT_RUN_KEYWORDS,
            max_per_keyword: DEFAULT_RUN_MAX_PER_KEYWORD,
            topic: DEFAULT_TOPIC.to_string(),
            language: "en".to_string(),
            include_pos: vec![PosTag::Noun, PosTag::ProperNoun],
            stopwords: Vec::new(),
        }
    }
}

impl MindMapConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_per_keyword == 0 {
            return Err(MindMapError::invalid_config("max_per_keyword must be > 0"));
        }

        if self.include_pos.is_empty() {
            return Err(MindMapError::invalid_config(
                "include_pos must name at least one tag",
            ));
        }

        if self.topic.trim().is_empty() {
            return Err(MindMapError::invalid_config("topic must not be empty"));
        }

        if !SUPPORTED_LANGUAGES.contains(&self.language.to_lowercase().as_str()) {
            return Err(MindMapError::invalid_config(format!(
                "unsupported language '{}', only English (\"en\") is available",
                self.language
            )));
        }

        Ok(())
    }

    /// Builder method: set number of keywords
    pub fn with_num_keywords(mut self, num_keywords: usize) -> Self {
        self.num_keywords = num_keywords;
        self
    }

    /// Builder method: set evidence cap per keyword
    pub fn with_max_per_keyword(mut self, max_per_keyword: usize) -> Self {
        self.max_per_keyword = max_per_keyword;
        self
    }

    /// Builder method: set topic label
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set accepted POS tags
    pub fn with_include_pos(mut self, include_pos: Vec<PosTag>) -> Self {
        self.include_pos = include_pos;
        self
    }

    /// Builder method: set extra stopwords
    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }
}
