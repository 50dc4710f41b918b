//! Phrase extraction components
//!
//! This module provides noun chunk detection over tagged sentences.

pub mod chunker;
