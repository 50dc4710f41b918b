//! Sentence and word segmentation
//!
//! Splits text on Unicode sentence and word boundaries (UAX #29). Whitespace
//! segments are dropped; punctuation is kept as its own word so the tagger
//! can see it. A possessive `'s` is split off its noun, so "robot's" yields
//! "robot" and "'s".

use unicode_segmentation::UnicodeSegmentation;

/// Possessive clitics split from the end of a word
pub const POSSESSIVE_CLITICS: &[&str] = &["'s", "\u{2019}s"];

/// Whether `word` is a possessive clitic on its own
pub fn is_possessive_clitic(word: &str) -> bool {
    POSSESSIVE_CLITICS
        .iter()
        .any(|clitic| word.eq_ignore_ascii_case(clitic))
}

/// A word slice with its byte offset in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawWord<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl RawWord<'_> {
    /// Byte offset one past the end of the word
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// A sentence slice with its words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence<'a> {
    /// Untrimmed sentence text, including trailing whitespace
    pub text: &'a str,
    pub start: usize,
    pub words: Vec<RawWord<'a>>,
}

impl RawSentence<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Unicode-aware segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences of words
    ///
    /// Sentences without any non-whitespace word are skipped.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<RawSentence<'a>> {
        text.split_sentence_bound_indices()
            .filter_map(|(start, sentence)| {
                let words: Vec<RawWord<'a>> = sentence
                    .split_word_bound_indices()
                    .filter(|(_, w)| !w.trim().is_empty())
                    .flat_map(|(offset, w)| split_possessive(w, start + offset))
                    .collect();

                if words.is_empty() {
                    None
                } else {
                    Some(RawSentence {
                        text: sentence,
                        start,
                        words,
                    })
                }
            })
            .collect()
    }
}

/// One word, or a stem followed by its possessive clitic
fn split_possessive(word: &str, start: usize) -> Vec<RawWord<'_>> {
    let stem_len = POSSESSIVE_CLITICS.iter().find_map(|clitic| {
        let cut = word.len().checked_sub(clitic.len())?;
        let (stem, tail) = (word.get(..cut)?, word.get(cut..)?);
        (!stem.is_empty() && tail.eq_ignore_ascii_case(clitic)).then_some(cut)
    });

    match stem_len {
        Some(cut) => vec![
            RawWord {
                text: &word[..cut],
                start,
            },
            RawWord {
                text: &word[cut..],
                start: start + cut,
            },
        ],
        None => vec![RawWord { text: word, start }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_split() {
        let text = "Machine learning is fun. It learns from data! Does it?";
        let sentences = Tokenizer::new().segment(text);

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text.trim(), "Machine learning is fun.");
        assert_eq!(sentences[1].text.trim(), "It learns from data!");
        assert_eq!(sentences[2].text.trim(), "Does it?");
    }

    #[test]
    fn test_word_offsets_point_into_source() {
        let text = "Natural language (NLP) helps.";
        let sentences = Tokenizer::new().segment(text);
        let words: Vec<_> = sentences[0].words.iter().map(|w| w.text).collect();

        assert_eq!(
            words,
            vec!["Natural", "language", "(", "NLP", ")", "helps", "."]
        );
        for word in &sentences[0].words {
            assert_eq!(&text[word.start..word.end()], word.text);
        }
    }

    #[test]
    fn test_newline_separated_sentences() {
        let text = "First part here. \nSecond part here.";
        let sentences = Tokenizer::new().segment(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text.trim(), "Second part here.");
        assert_eq!(sentences[1].words[0].text, "Second");
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(Tokenizer::new().segment("   \n\t ").is_empty());
        assert!(Tokenizer::new().segment("").is_empty());
    }

    #[test]
    fn test_possessive_is_split_from_noun() {
        let text = "The robot's arm and the robot\u{2019}s sensor.";
        let sentences = Tokenizer::new().segment(text);
        let words: Vec<_> = sentences[0].words.iter().map(|w| w.text).collect();

        assert_eq!(
            words,
            vec!["The", "robot", "'s", "arm", "and", "the", "robot", "\u{2019}s", "sensor", "."]
        );
        for word in &sentences[0].words {
            assert_eq!(&text[word.start..word.end()], word.text);
        }
        assert!(is_possessive_clitic("'s"));
        assert!(!is_possessive_clitic("robot's"));
    }

    #[test]
    fn test_words_ending_in_s_are_not_split() {
        let sentences = Tokenizer::new().segment("Robots process signals.");
        let words: Vec<_> = sentences[0].words.iter().map(|w| w.text).collect();
        assert_eq!(words, vec!["Robots", "process", "signals", "."]);
    }
}
