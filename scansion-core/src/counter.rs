//! The syllable counting capability consumed by the matcher

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Plausible syllable counts for one word, one per distinct pronunciation
///
/// Kept sorted ascending and free of duplicates. An empty set means the word
/// could not be counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u32>")]
pub struct CountSet(SmallVec<[u32; 2]>);

impl CountSet {
    /// The empty set
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// A set with a single count
    pub fn single(count: u32) -> Self {
        let mut counts = SmallVec::new();
        counts.push(count);
        Self(counts)
    }

    /// Insert a count, keeping the set sorted
    pub fn insert(&mut self, count: u32) {
        if let Err(at) = self.0.binary_search(&count) {
            self.0.insert(at, count);
        }
    }

    /// True when the word is uncountable
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct counts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Smallest count, if any
    pub fn min(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// Whether `count` is one of the plausible counts
    pub fn contains(&self, count: u32) -> bool {
        self.0.binary_search(&count).is_ok()
    }

    /// Counts in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Counts as a sorted slice
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl FromIterator<u32> for CountSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut counts: SmallVec<[u32; 2]> = iter.into_iter().collect();
        counts.sort_unstable();
        counts.dedup();
        Self(counts)
    }
}

impl From<Vec<u32>> for CountSet {
    fn from(counts: Vec<u32>) -> Self {
        counts.into_iter().collect()
    }
}

impl<const N: usize> From<[u32; N]> for CountSet {
    fn from(counts: [u32; N]) -> Self {
        counts.into_iter().collect()
    }
}

/// Resolves a word to its plausible syllable counts
///
/// Implementations normalize case and punctuation themselves and must be a
/// pure function of the word. Unknown words yield an empty [`CountSet`];
/// counting never fails.
pub trait SyllableCounter {
    /// Plausible syllable counts for `word`
    fn count(&self, word: &str) -> CountSet;

    /// Whether some word may be counted as zero syllables
    ///
    /// When true the matcher cannot assume every word consumes at least one
    /// syllable and bounds input length by summed minimum counts instead.
    fn allows_silent_words(&self) -> bool {
        false
    }
}

impl<T: SyllableCounter + ?Sized> SyllableCounter for &T {
    fn count(&self, word: &str) -> CountSet {
        (**self).count(word)
    }

    fn allows_silent_words(&self) -> bool {
        (**self).allows_silent_words()
    }
}

impl<T: SyllableCounter + ?Sized> SyllableCounter for Box<T> {
    fn count(&self, word: &str) -> CountSet {
        (**self).count(word)
    }

    fn allows_silent_words(&self) -> bool {
        (**self).allows_silent_words()
    }
}

impl<T: SyllableCounter + ?Sized> SyllableCounter for Arc<T> {
    fn count(&self, word: &str) -> CountSet {
        (**self).count(word)
    }

    fn allows_silent_words(&self) -> bool {
        (**self).allows_silent_words()
    }
}

/// Exact-key word list
impl<S: BuildHasher> SyllableCounter for HashMap<String, CountSet, S> {
    fn count(&self, word: &str) -> CountSet {
        self.get(word).cloned().unwrap_or_default()
    }

    fn allows_silent_words(&self) -> bool {
        self.values().any(|counts| counts.contains(0))
    }
}
