//! Output formatting module

use anyhow::Result;
use scansion_core::Partition;

/// A text that scanned, with where it came from
#[derive(Debug, Clone, Copy)]
pub struct Verse<'a> {
    /// Input file name
    pub source: &'a str,
    /// One-based line number when matching line by line
    pub line: Option<usize>,
    /// The matched grouping
    pub partition: &'a Partition,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single match
    fn format_verse(&mut self, verse: &Verse<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
