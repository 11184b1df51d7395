//! Match results

use std::fmt;

use serde::Serialize;

/// Words of a text grouped to fit a pattern, one group per element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Partition {
    lines: Vec<Vec<String>>,
}

impl Partition {
    /// Rebuild groups from the break stack produced by the search
    ///
    /// `breaks` holds the index of each group's last word, popped in
    /// increasing order.
    pub(crate) fn from_breaks(words: &[&str], mut breaks: Vec<usize>) -> Self {
        let mut lines = Vec::with_capacity(breaks.len());
        let mut current = Vec::new();

        for (i, word) in words.iter().enumerate() {
            current.push((*word).to_string());
            if breaks.last() == Some(&i) {
                lines.push(std::mem::take(&mut current));
                breaks.pop();
            }
        }

        Self { lines }
    }

    /// Groups in pattern order
    pub fn lines(&self) -> &[Vec<String>] {
        &self.lines
    }

    /// Consume into the underlying groups
    pub fn into_lines(self) -> Vec<Vec<String>> {
        self.lines
    }

    /// All words in their original order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flatten().map(String::as_str)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True only for a partition with no groups
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Partition> for Vec<Vec<String>> {
    fn from(partition: Partition) -> Self {
        partition.lines
    }
}

/// One group per line, words separated by a single space
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}
