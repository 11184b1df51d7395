//! Concrete syllable counters
//!
//! - [`DictionaryCounter`]: CMU Pronouncing Dictionary lookups, keeping every
//!   pronunciation's count
//! - [`EstimatingCounter`]: spelling-based estimate for words a dictionary
//!   does not know
//! - [`CompositeCounter`]: first non-empty answer from an ordered list

mod composite;
mod dictionary;
mod estimate;

pub use composite::CompositeCounter;
pub use dictionary::DictionaryCounter;
pub use estimate::EstimatingCounter;

/// Strip ASCII punctuation from the start of a word
pub(crate) fn trim_leading_punctuation(word: &str) -> &str {
    word.trim_start_matches(|c: char| c.is_ascii_punctuation())
}

/// Strip ASCII punctuation from the end of a word
pub(crate) fn trim_trailing_punctuation(word: &str) -> &str {
    word.trim_end_matches(|c: char| c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_punctuation() {
        assert_eq!(trim_leading_punctuation("\"hello,"), "hello,");
        assert_eq!(trim_trailing_punctuation("hello,\""), "hello");
        assert_eq!(trim_trailing_punctuation("don't"), "don't");
        assert_eq!(trim_leading_punctuation("..."), "");
    }
}
