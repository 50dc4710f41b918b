//! Natural Language Processing components
//!
//! This module provides the [`Analyzer`](analyzer::Analyzer) seam and a
//! rule-based English implementation built from segmentation, stopword
//! filtering, POS tagging and lemmatization.

pub mod analyzer;
pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
