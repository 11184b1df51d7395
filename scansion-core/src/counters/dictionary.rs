//! CMU Pronouncing Dictionary counter

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::counter::{CountSet, SyllableCounter};
use crate::error::{Error, Result};

use super::{trim_leading_punctuation, trim_trailing_punctuation};

/// Syllable counts looked up in a pronouncing dictionary
///
/// The input format is one pronunciation per line, `WORD PH0 PH1 ...`, with
/// alternates spelled `WORD(2)`. A pronunciation has as many syllables as it
/// has phonemes carrying a stress digit (`AH0`, `EY1`). Every distinct count
/// across a word's pronunciations is kept.
#[derive(Clone, Default)]
pub struct DictionaryCounter {
    entries: HashMap<String, CountSet>,
    silent: bool,
}

impl DictionaryCounter {
    /// Load a dictionary from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut counter = Self::default();

        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            counter.add_line(&line, i + 1)?;
        }

        log::debug!("loaded {} dictionary entries", counter.entries.len());
        Ok(counter)
    }

    /// Load a dictionary file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading dictionary {}", path.display());
        Self::from_reader(File::open(path)?)
    }

    /// Parse dictionary text
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    fn add_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let line = match line.find(" #") {
            Some(comment) => &line[..comment],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with(";;;") {
            return Ok(());
        }

        let mut pieces = line.split_whitespace();
        let Some(head) = pieces.next() else {
            return Ok(());
        };

        let mut phonemes = pieces.peekable();
        if phonemes.peek().is_none() {
            return Err(Error::Dictionary {
                line: line_no,
                reason: format!("'{head}' has no phonemes"),
            });
        }

        // Alternate pronunciation, e.g. `tomato(2)`
        let word = match head.find('(') {
            Some(open) if open > 0 => &head[..open],
            _ => head,
        };

        let syllables = phonemes
            .filter(|p| p.ends_with(|c: char| c.is_ascii_digit()))
            .count();
        let syllables = u32::try_from(syllables).map_err(|_| Error::Dictionary {
            line: line_no,
            reason: "too many phonemes".to_string(),
        })?;

        self.silent |= syllables == 0;
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .insert(syllables);
        Ok(())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no words were loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the exact (lowercased) word is present
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    fn lookup(&self, key: &str) -> Option<&CountSet> {
        self.entries.get(key).filter(|counts| !counts.is_empty())
    }
}

impl SyllableCounter for DictionaryCounter {
    fn count(&self, word: &str) -> CountSet {
        let word = word.to_lowercase();
        let word = trim_leading_punctuation(&word);
        if let Some(counts) = self.lookup(word) {
            return counts.clone();
        }

        self.lookup(trim_trailing_punctuation(word))
            .cloned()
            .unwrap_or_default()
    }

    fn allows_silent_words(&self) -> bool {
        self.silent
    }
}

impl fmt::Debug for DictionaryCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryCounter")
            .field("entries", &self.entries.len())
            .field("silent", &self.silent)
            .finish()
    }
}
