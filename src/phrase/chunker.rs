//! Noun chunk detection
//!
//! Identifies noun phrases using pattern matching on POS tags.
//! Pattern: (DET)? (ADJ|NUM)* (NOUN|PROPN)+

use crate::types::{ChunkSpan, PosTag, Token};

/// Configuration for noun chunk detection
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Minimum number of tokens in a chunk
    pub min_length: usize,
    /// Maximum number of tokens in a chunk
    pub max_length: usize,
    /// Whether to include determiners in chunks
    pub include_determiners: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 8,
            include_determiners: true,
        }
    }
}

/// Noun chunk detector
#[derive(Debug, Clone)]
pub struct NounChunker {
    config: ChunkerConfig,
}

impl Default for NounChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl NounChunker {
    /// Create a new chunker with default config
    pub fn new() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }

    /// Create a chunker with custom config
    pub fn with_config(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Set maximum chunk length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Set whether a leading determiner belongs to the chunk
    pub fn with_determiners(mut self, include_determiners: bool) -> Self {
        self.config.include_determiners = include_determiners;
        self
    }

    /// Extract noun chunks from the tokens of one sentence, left to right
    ///
    /// `tokens` must be contiguous in the document (`token_idx` increasing by one).
    pub fn extract_chunks(&self, tokens: &[Token]) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();
        let Some(first) = tokens.first() else {
            return chunks;
        };
        let base = first.token_idx;

        let mut i = 0;
        while i < tokens.len() {
            if let Some(span) = self.match_noun_phrase(tokens, i) {
                let len = span.token_len();
                if len >= self.config.min_length && len <= self.config.max_length {
                    i = span.end_token - base;
                    chunks.push(span);
                    continue;
                }
            }
            i += 1;
        }

        chunks
    }

    /// Try to match a noun phrase pattern starting at position `start`
    fn match_noun_phrase(&self, tokens: &[Token], start: usize) -> Option<ChunkSpan> {
        let mut end = start;

        if tokens[end].pos == PosTag::Determiner {
            if !self.config.include_determiners {
                return None;
            }
            end += 1;
        }

        while end < tokens.len() && tokens[end].pos.is_noun_modifier() {
            end += 1;
        }

        let noun_start = end;
        while end < tokens.len() && tokens[end].pos.is_noun() {
            end += 1;
        }

        if end == noun_start {
            return None;
        }

        let first_token = &tokens[start];
        let last_token = &tokens[end - 1];

        Some(ChunkSpan {
            start_token: first_token.token_idx,
            end_token: last_token.token_idx + 1,
            start_char: first_token.start,
            end_char: last_token.end,
            sentence_idx: first_token.sentence_idx,
        })
    }
}
