//! Linguistic analysis
//!
//! An [`Analyzer`] turns raw text into a [`Document`]: tokens carrying lemma,
//! POS tag, alphabetic and stopword flags, grouped into sentences that own
//! their noun chunks. The keyword ranker and evidence grouper only depend on
//! this trait, so tests can supply hand-built documents.
//!
//! Analyzers are built once and shared by reference across runs; `analyze`
//! takes `&self` and must not mutate shared state.

use crate::nlp::lemmatizer::lemmatize;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::PosTagger;
use crate::nlp::tokenizer::Tokenizer;
use crate::phrase::chunker::NounChunker;
use crate::types::{Document, MindMapConfig, Sentence, Token};

/// Text → tokens, sentences and noun chunks
pub trait Analyzer {
    /// Analyse `text`. Token and chunk offsets index into `text` itself.
    fn analyze(&self, text: &str) -> Document;
}

/// Default English analyzer built from heuristic components
#[derive(Debug, Clone)]
pub struct RuleBasedAnalyzer {
    tokenizer: Tokenizer,
    tagger: PosTagger,
    stopwords: StopwordFilter,
    chunker: NounChunker,
}

impl Default for RuleBasedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedAnalyzer {
    /// Create an English analyzer
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            tagger: PosTagger::new(),
            stopwords: StopwordFilter::new(),
            chunker: NounChunker::new(),
        }
    }

    /// Create an analyzer with the extra stopwords of a config
    pub fn from_config(config: &MindMapConfig) -> Self {
        Self::new().with_stopwords(StopwordFilter::new().with_extra(&config.stopwords))
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the noun chunker
    pub fn with_chunker(mut self, chunker: NounChunker) -> Self {
        self.chunker = chunker;
        self
    }
}

impl Analyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Document {
        let mut tokens: Vec<Token> = Vec::new();
        let mut sentences: Vec<Sentence> = Vec::new();

        for (sentence_idx, raw) in self.tokenizer.segment(text).into_iter().enumerate() {
            let words: Vec<&str> = raw.words.iter().map(|w| w.text).collect();
            let tags = self.tagger.tag_sentence(&words);
            let start_token = tokens.len();

            for (word, pos) in raw.words.iter().zip(tags) {
                let token = Token::new(
                    word.text,
                    lemmatize(word.text, pos),
                    pos,
                    word.start,
                    word.end(),
                    sentence_idx,
                    tokens.len(),
                )
                .with_stopword(self.stopwords.is_stopword(word.text));
                tokens.push(token);
            }

            let mut sentence = Sentence::new(raw.text, raw.start, raw.end(), sentence_idx);
            sentence.start_token = start_token;
            sentence.end_token = tokens.len();
            sentence.noun_chunks = self.chunker.extract_chunks(&tokens[start_token..]);
            sentences.push(sentence);
        }

        tracing::trace!(
            sentences = sentences.len(),
            tokens = tokens.len(),
            "analyzed text"
        );

        Document {
            text: text.to_string(),
            tokens,
            sentences,
        }
    }
}
