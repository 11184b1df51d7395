//! Matching text against a syllable pattern

use thiserror::Error;

use crate::counter::{CountSet, SyllableCounter};
use crate::partition::Partition;
use crate::pattern::Pattern;
use crate::search;

/// How over-long input is rejected before the search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    /// More words than the pattern sum never fits
    ///
    /// Applied before the counter is queried. Only sound when every
    /// countable word has at least one syllable.
    WordCount,
    /// The summed minimum count of every word must not exceed the pattern sum
    MinimumSum,
}

impl LengthBound {
    /// The sound bound for a counter
    pub fn for_counter<C: SyllableCounter + ?Sized>(counter: &C) -> Self {
        if counter.allows_silent_words() {
            LengthBound::MinimumSum
        } else {
            LengthBound::WordCount
        }
    }
}

/// Why a text does not scan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// The text has no words
    #[error("text is empty")]
    Empty,

    /// More words than syllables in the pattern
    #[error("{words} words exceed the {budget}-syllable pattern")]
    TooManyWords {
        /// Words in the text
        words: usize,
        /// Pattern sum
        budget: usize,
    },

    /// Even the shortest readings exceed the pattern
    #[error("at least {minimum} syllables exceed the {budget}-syllable pattern")]
    OverBudget {
        /// Sum of each word's smallest count
        minimum: usize,
        /// Pattern sum
        budget: usize,
    },

    /// A word has no known syllable count
    #[error("cannot count syllables in '{word}'")]
    Uncountable {
        /// The first uncountable word
        word: String,
    },

    /// No grouping of the words fits the pattern
    #[error("no grouping of the words fits the pattern")]
    NoFit,
}

/// Partitions text into consecutive word groups matching a pattern
///
/// The matcher holds no per-call state, so one instance can serve any
/// number of threads as long as the counter can.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use scansion_core::{CountSet, Pattern, PatternMatcher};
///
/// let mut words = HashMap::new();
/// words.insert("some".to_string(), CountSet::single(1));
/// words.insert("random".to_string(), CountSet::single(2));
/// words.insert("words".to_string(), CountSet::single(3));
///
/// let matcher = PatternMatcher::new(words, Pattern::new(vec![1, 2, 3]).unwrap());
/// let partition = matcher.match_text("some random words").unwrap();
/// assert_eq!(partition.to_string(), "some\nrandom\nwords");
/// ```
#[derive(Debug, Clone)]
pub struct PatternMatcher<C> {
    counter: C,
    pattern: Pattern,
    length_bound: LengthBound,
}

impl<C: SyllableCounter> PatternMatcher<C> {
    /// Create a matcher, choosing the length bound the counter allows
    pub fn new(counter: C, pattern: Pattern) -> Self {
        let length_bound = LengthBound::for_counter(&counter);
        Self {
            counter,
            pattern,
            length_bound,
        }
    }

    /// Create a matcher for the 5-7-5 haiku pattern
    pub fn haiku(counter: C) -> Self {
        Self::new(counter, Pattern::haiku())
    }

    /// Override the length bound
    pub fn with_length_bound(mut self, length_bound: LengthBound) -> Self {
        self.length_bound = length_bound;
        self
    }

    /// The target pattern
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The syllable counter
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// The length bound in force
    pub fn length_bound(&self) -> LengthBound {
        self.length_bound
    }

    /// Partition `text` to fit the pattern, if possible
    pub fn match_text(&self, text: &str) -> Option<Partition> {
        self.explain(text).ok()
    }

    /// Partition `text`, reporting why it does not fit otherwise
    ///
    /// Words are whitespace-separated and passed to the counter as-is. Any
    /// uncountable word fails the whole text.
    pub fn explain(&self, text: &str) -> Result<Partition, Mismatch> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let budget = self.pattern.sum();

        log::trace!(
            "matching {} words against {} ({:?})",
            words.len(),
            self.pattern,
            self.length_bound
        );

        if words.is_empty() {
            return Err(Mismatch::Empty);
        }
        if self.length_bound == LengthBound::WordCount && words.len() > budget {
            return Err(Mismatch::TooManyWords {
                words: words.len(),
                budget,
            });
        }

        let counts = self.count_words(&words)?;

        if self.length_bound == LengthBound::MinimumSum {
            let minimum: usize = counts
                .iter()
                .filter_map(CountSet::min)
                .map(|c| c as usize)
                .sum();
            if minimum > budget {
                return Err(Mismatch::OverBudget { minimum, budget });
            }
        }

        match search::find_breaks(self.pattern.elements(), &counts) {
            Some(breaks) => Ok(Partition::from_breaks(&words, breaks)),
            None => {
                log::debug!("no grouping of {} words fits {}", words.len(), self.pattern);
                Err(Mismatch::NoFit)
            }
        }
    }

    fn count_words(&self, words: &[&str]) -> Result<Vec<CountSet>, Mismatch> {
        words
            .iter()
            .map(|&word| {
                let counts = self.counter.count(word);
                if counts.is_empty() {
                    log::debug!("uncountable word '{word}'");
                    Err(Mismatch::Uncountable {
                        word: word.to_string(),
                    })
                } else {
                    Ok(counts)
                }
            })
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<C: SyllableCounter + Sync> PatternMatcher<C> {
    /// Match independent texts in parallel, preserving input order
    pub fn match_all<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Option<Partition>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.match_text(text.as_ref()))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<C: SyllableCounter> PatternMatcher<C> {
    /// Match independent texts, preserving input order
    pub fn match_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Option<Partition>> {
        texts
            .iter()
            .map(|text| self.match_text(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn fake_counter() -> HashMap<String, CountSet> {
        [
            ("some", CountSet::from([1])),
            ("random", CountSet::from([2])),
            ("words", CountSet::from([3])),
            ("here", CountSet::from([4])),
            ("for", CountSet::from([1, 2])),
            ("testing", CountSet::from([3, 4])),
            ("purposes", CountSet::empty()),
        ]
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .collect()
    }

    fn matcher() -> PatternMatcher<HashMap<String, CountSet>> {
        PatternMatcher::new(fake_counter(), Pattern::new(vec![1, 2, 3]).unwrap())
    }

    fn lines(partition: Partition) -> Vec<Vec<String>> {
        partition.into_lines()
    }

    /// Counts every lookup
    struct Tally<'a> {
        calls: &'a Cell<usize>,
    }

    impl SyllableCounter for Tally<'_> {
        fn count(&self, _word: &str) -> CountSet {
            self.calls.set(self.calls.get() + 1);
            CountSet::single(1)
        }
    }

    #[test]
    fn test_matches() {
        let m = matcher();
        assert_eq!(
            lines(m.match_text("some random words").unwrap()),
            vec![vec!["some"], vec!["random"], vec!["words"]]
        );
        assert_eq!(
            lines(m.match_text("some random some random").unwrap()),
            vec![vec!["some"], vec!["random"], vec!["some", "random"]]
        );
        assert_eq!(
            lines(m.match_text("for for for for").unwrap()),
            vec![vec!["for"], vec!["for"], vec!["for", "for"]]
        );
        assert_eq!(
            lines(m.match_text("for random testing").unwrap()),
            vec![vec!["for"], vec!["random"], vec!["testing"]]
        );
    }

    #[test]
    fn test_does_not_match() {
        let m = matcher();
        assert_eq!(m.explain("words random some"), Err(Mismatch::NoFit));
        assert_eq!(m.explain("some random here"), Err(Mismatch::NoFit));
        assert_eq!(
            m.explain("some purposes"),
            Err(Mismatch::Uncountable {
                word: "purposes".into()
            })
        );
        assert_eq!(m.explain("testing testing"), Err(Mismatch::NoFit));
        assert_eq!(m.explain("   "), Err(Mismatch::Empty));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let partition = matcher().match_text("  some\trandom\n\nwords ").unwrap();
        assert_eq!(partition.to_string(), "some\nrandom\nwords");
    }

    #[test]
    fn test_word_count_bound_skips_counter() {
        let calls = Cell::new(0);
        let m = PatternMatcher::new(Tally { calls: &calls }, Pattern::new(vec![1, 1]).unwrap());
        assert_eq!(m.length_bound(), LengthBound::WordCount);

        assert_eq!(
            m.explain("a b c"),
            Err(Mismatch::TooManyWords {
                words: 3,
                budget: 2
            })
        );
        assert_eq!(calls.get(), 0);

        assert!(m.match_text("a b").is_some());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_silent_words_select_minimum_sum() {
        let mut counter = fake_counter();
        counter.insert("hmm".into(), CountSet::from([0]));

        let m = PatternMatcher::new(counter, Pattern::new(vec![1, 2]).unwrap());
        assert_eq!(m.length_bound(), LengthBound::MinimumSum);

        // Four words for a three-syllable pattern
        assert_eq!(
            lines(m.match_text("hmm some hmm random").unwrap()),
            vec![vec!["hmm", "some"], vec!["hmm", "random"]]
        );
        // Within budget but "words" overshoots the first group
        assert_eq!(m.explain("words hmm"), Err(Mismatch::NoFit));
        assert_eq!(
            m.explain("here hmm"),
            Err(Mismatch::OverBudget {
                minimum: 4,
                budget: 3
            })
        );
    }

    #[test]
    fn test_forced_word_count_bound() {
        let mut counter = fake_counter();
        counter.insert("hmm".into(), CountSet::from([0]));

        let m = PatternMatcher::new(counter, Pattern::new(vec![1, 2]).unwrap())
            .with_length_bound(LengthBound::WordCount);
        assert!(matches!(
            m.explain("hmm some hmm random"),
            Err(Mismatch::TooManyWords { words: 4, budget: 3 })
        ));
    }

    #[test]
    fn test_haiku_constructor() {
        let m = PatternMatcher::haiku(fake_counter());
        assert_eq!(m.pattern(), &Pattern::haiku());
        assert!(m.counter().contains_key("some"));
    }

    #[test]
    fn test_match_all_preserves_order() {
        let m = matcher();
        let results = m.match_all(&["some random words", "some purposes", "for for for for"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
        assert_eq!(results[2].as_ref().map(Partition::len), Some(3));
    }

    #[test]
    fn test_idempotent() {
        let m = matcher();
        assert_eq!(
            m.match_text("for for for for"),
            m.match_text("for for for for")
        );
    }
}
