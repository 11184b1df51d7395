//! Ordered fallback across several counters

use std::fmt;

use crate::counter::{CountSet, SyllableCounter};

type Delegate = Box<dyn SyllableCounter + Send + Sync>;

/// Asks each delegate in turn and returns the first non-empty answer
#[derive(Default)]
pub struct CompositeCounter {
    delegates: Vec<Delegate>,
}

impl CompositeCounter {
    /// Create a composite with no delegates
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delegate, builder style
    pub fn with<C>(mut self, counter: C) -> Self
    where
        C: SyllableCounter + Send + Sync + 'static,
    {
        self.push(counter);
        self
    }

    /// Append a delegate
    pub fn push<C>(&mut self, counter: C)
    where
        C: SyllableCounter + Send + Sync + 'static,
    {
        self.delegates.push(Box::new(counter));
    }

    /// Number of delegates
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// True when there are no delegates
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl SyllableCounter for CompositeCounter {
    fn count(&self, word: &str) -> CountSet {
        self.delegates
            .iter()
            .map(|delegate| delegate.count(word))
            .find(|counts| !counts.is_empty())
            .unwrap_or_default()
    }

    fn allows_silent_words(&self) -> bool {
        self.delegates.iter().any(|d| d.allows_silent_words())
    }
}

impl fmt::Debug for CompositeCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeCounter")
            .field("delegates", &self.delegates.len())
            .finish()
    }
}
