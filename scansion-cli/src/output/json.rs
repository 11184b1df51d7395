//! JSON output formatter

use super::{OutputFormatter, Verse};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs matches as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    verses: Vec<VerseData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct VerseData {
    /// Input file the text came from
    pub source: String,
    /// One-based line number, when matching line by line
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<usize>,
    /// Matched groups, words joined by spaces
    pub lines: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            verses: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_verse(&mut self, verse: &Verse<'_>) -> Result<()> {
        self.verses.push(VerseData {
            source: verse.source.to_string(),
            line: verse.line,
            lines: verse
                .partition
                .lines()
                .iter()
                .map(|words| words.join(" "))
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.verses)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.verses)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansion_core::{CountSet, Pattern, PatternMatcher};
    use std::collections::HashMap;

    #[test]
    fn test_compact_output() {
        let words: HashMap<String, CountSet> = [("la".to_string(), CountSet::single(1))].into();
        let matcher = PatternMatcher::new(words, Pattern::new(vec![1, 2]).unwrap());
        let partition = matcher.match_text("la la la").unwrap();

        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_verse(&Verse {
                source: "song.txt",
                line: Some(3),
                partition: &partition,
            })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            output,
            "[{\"source\":\"song.txt\",\"line\":3,\"lines\":[\"la\",\"la la\"]}]\n"
        );
    }

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();

        let parsed: Vec<VerseData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert!(parsed.is_empty());
    }
}
