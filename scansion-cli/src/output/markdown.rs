//! Markdown output formatter

use super::{OutputFormatter, Verse};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - numbered verses as line blocks
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    verse_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verse_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_verse(&mut self, verse: &Verse<'_>) -> Result<()> {
        self.verse_count += 1;
        match verse.line {
            Some(line) => writeln!(
                self.writer,
                "### {}. {} (line {})",
                self.verse_count, verse.source, line
            )?,
            None => writeln!(self.writer, "### {}. {}", self.verse_count, verse.source)?,
        }
        writeln!(self.writer)?;
        for words in verse.partition.lines() {
            // Trailing backslash keeps the lines apart when rendered
            writeln!(self.writer, "{}\\", words.join(" "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total verses: {}*", self.verse_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
