//! Spelling-based syllable estimate

use crate::counter::{CountSet, SyllableCounter};

/// Longest word the estimator will attempt
pub const DEFAULT_MAX_LEN: usize = 20;

const VOWELS: [u8; 6] = [b'a', b'e', b'i', b'o', b'u', b'y'];

/// Estimates syllables from vowel groups
///
/// Gives exactly one count for plain words made of ASCII letters and
/// apostrophes, and nothing for anything else (digits, symbols, words
/// longer than `max_len`). Intended as a fallback behind a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatingCounter {
    max_len: usize,
}

impl EstimatingCounter {
    /// Create an estimator with the default length limit
    pub fn new() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Set the longest word that will be estimated
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Estimate syllables in a cleaned, lowercase word
    fn estimate(word: &str) -> u32 {
        let bytes = word.as_bytes();
        let mut syllables: u32 = 0;
        let mut previous_was_vowel = false;

        for &b in bytes {
            let is_vowel = VOWELS.contains(&b);
            if is_vowel && !previous_was_vowel {
                syllables += 1;
            }
            previous_was_vowel = is_vowel;
        }

        // Silent e, except consonant + le (table) and ee (free)
        if word.ends_with('e') && syllables > 1 {
            let consonant_le = bytes.len() >= 3
                && word.ends_with("le")
                && !VOWELS.contains(&bytes[bytes.len() - 3]);
            if !consonant_le && !word.ends_with("ee") {
                syllables -= 1;
            }
        }

        // -ed that is not pronounced, as in jumped
        if word.ends_with("ed") && syllables > 1 {
            let before = bytes.len().checked_sub(3).map(|i| bytes[i]);
            if !matches!(before, Some(b't' | b'd')) {
                syllables -= 1;
            }
        }

        syllables.max(1)
    }
}

impl Default for EstimatingCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllableCounter for EstimatingCounter {
    fn count(&self, word: &str) -> CountSet {
        let word = word.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'');
        let word = word.trim_matches('\'');

        if word.is_empty() || word.len() > self.max_len {
            return CountSet::empty();
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic() || c == '\'') {
            return CountSet::empty();
        }

        CountSet::single(Self::estimate(&word.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(word: &str) -> Vec<u32> {
        EstimatingCounter::new().count(word).iter().collect()
    }

    #[test]
    fn test_estimates() {
        assert_eq!(count("hello"), vec![2]);
        assert_eq!(count("world"), vec![1]);
        assert_eq!(count("beautiful"), vec![3]);
        assert_eq!(count("running"), vec![2]);
        assert_eq!(count("a"), vec![1]);
    }

    #[test]
    fn test_endings() {
        assert_eq!(count("make"), vec![1]);
        assert_eq!(count("made"), vec![1]);
        assert_eq!(count("whale"), vec![1]);
        assert_eq!(count("table"), vec![2]);
        assert_eq!(count("people"), vec![2]);
        assert_eq!(count("free"), vec![1]);
        assert_eq!(count("jumped"), vec![1]);
        assert_eq!(count("wanted"), vec![2]);
    }

    #[test]
    fn test_trims_and_normalizes() {
        assert_eq!(count("\"Hello,"), vec![2]);
        assert_eq!(count("don't"), vec![1]);
        assert_eq!(count("'twas"), vec![1]);
    }

    #[test]
    fn test_refuses_unusual_words() {
        assert!(count("").is_empty());
        assert!(count("...").is_empty());
        assert!(count("42").is_empty());
        assert!(count("naïve").is_empty());
        assert!(count("well-known").is_empty());
        assert!(count("pneumonoultramicroscopic").is_empty());
        assert_eq!(
            EstimatingCounter::new()
                .with_max_len(30)
                .count("pneumonoultramicroscopic")
                .len(),
            1
        );
    }

    #[test]
    fn test_never_silent() {
        assert!(!EstimatingCounter::new().allows_silent_words());
        assert_eq!(count("hmm"), vec![1]);
    }
}
