//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Expand glob patterns into a sorted, de-duplicated list of files
///
/// Directories matched by a pattern are skipped. Fails when nothing at all
/// matched, naming the patterns that were tried.
pub fn resolve_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let pattern: &str = pattern.as_ref();
        let before = files.len();
        for entry in glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.insert(path);
            }
        }
        log::trace!("{pattern}: {} new files", files.len() - before);
    }

    if files.is_empty() {
        let tried: Vec<&str> = patterns.iter().map(|p| p.as_ref()).collect();
        anyhow::bail!("No files found matching: {}", tried.join(", "));
    }

    log::debug!("Resolved {} input files", files.len());
    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_and_dedups() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let star = dir.path().join("*.txt").display().to_string();
        let exact = dir.path().join("a.txt").display().to_string();
        let files = resolve_patterns(&[star, exact]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_no_files() {
        let err = resolve_patterns(&["/nonexistent/*.txt"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No files found matching: /nonexistent/*.txt"
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["["]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }
}
