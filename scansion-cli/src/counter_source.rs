//! Syllable counter selection for CLI

use anyhow::Result;
use scansion_core::counters::{CompositeCounter, DictionaryCounter, EstimatingCounter};
use std::path::PathBuf;

use crate::error::CliError;

/// Where syllable counts come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSource {
    /// Pronouncing dictionary, consulted first
    pub dictionary: Option<PathBuf>,
    /// Fall back to spelling-based estimates
    pub estimate: bool,
}

impl CounterSource {
    /// Build the counter stack: dictionary first, then the estimator
    pub fn build(&self) -> Result<CompositeCounter> {
        let mut counter = CompositeCounter::new();

        if let Some(path) = &self.dictionary {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let dictionary = DictionaryCounter::from_file(path)
                .map_err(|e| CliError::DictionaryError(format!("{}: {e}", path.display())))?;
            log::info!(
                "Loaded {} words from {}",
                dictionary.len(),
                path.display()
            );
            counter.push(dictionary);
        }

        if self.estimate {
            counter.push(EstimatingCounter::new());
        }

        if counter.is_empty() {
            return Err(CliError::ConfigError(
                "no syllable counter configured; pass --dictionary or allow estimates".into(),
            )
            .into());
        }

        Ok(counter)
    }

    /// Get the display name for the counter source
    pub fn display_name(&self) -> String {
        match (&self.dictionary, self.estimate) {
            (Some(path), true) => format!("Dictionary: {} + estimates", path.display()),
            (Some(path), false) => format!("Dictionary: {}", path.display()),
            (None, true) => "Estimates only".to_string(),
            (None, false) => "None".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansion_core::SyllableCounter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_estimates_only() {
        let source = CounterSource {
            dictionary: None,
            estimate: true,
        };
        let counter = source.build().unwrap();
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.count("hello").as_slice(), &[2]);
        assert_eq!(source.display_name(), "Estimates only");
    }

    #[test]
    fn test_dictionary_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mini.dict");
        fs::write(&path, "hello HH AH0 L OW1\nhello(2) HH EH0 L OW1\nfire F AY1 ER0\nfire(2) F AY1 R\n")
            .unwrap();

        let source = CounterSource {
            dictionary: Some(path),
            estimate: true,
        };
        let counter = source.build().unwrap();
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.count("fire").as_slice(), &[1, 2]);
        assert_eq!(counter.count("world").as_slice(), &[1]);
        assert!(source.display_name().ends_with("+ estimates"));
    }

    #[test]
    fn test_nothing_configured() {
        let source = CounterSource {
            dictionary: None,
            estimate: false,
        };
        let err = source.build().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_missing_dictionary() {
        let source = CounterSource {
            dictionary: Some(PathBuf::from("/nonexistent/cmudict.dict")),
            estimate: true,
        };
        let err = source.build().unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_malformed_dictionary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.dict");
        fs::write(&path, "hello\n").unwrap();

        let source = CounterSource {
            dictionary: Some(path),
            estimate: false,
        };
        let err = source.build().unwrap_err();
        assert!(err.to_string().starts_with("Dictionary error"));
    }
}
