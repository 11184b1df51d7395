//! Plain text output formatter

use super::{OutputFormatter, Verse};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one group per line, blank line between matches
pub struct TextFormatter<W: Write> {
    writer: W,
    verses: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, verses: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_verse(&mut self, verse: &Verse<'_>) -> Result<()> {
        if self.verses > 0 {
            writeln!(self.writer)?;
        }
        self.verses += 1;
        writeln!(self.writer, "{}", verse.partition)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
