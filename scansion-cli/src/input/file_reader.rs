//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// One text to be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// One-based line number when matching line by line
    pub line: Option<usize>,
    /// The text itself
    pub text: &'a str,
}

/// Split file content into texts to match
///
/// The whole content is a single candidate unless `per_line` is set, in
/// which case every non-blank line is one.
pub fn split_candidates(content: &str, per_line: bool) -> Vec<Candidate<'_>> {
    if !per_line {
        return vec![Candidate {
            line: None,
            text: content,
        }];
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, text)| Candidate {
            line: Some(i + 1),
            text,
        })
        .collect()
}
