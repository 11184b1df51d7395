//! Validate command implementation

use anyhow::Result;
use clap::Args;
use scansion_core::counters::DictionaryCounter;
use scansion_core::SyllableCounter;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to a CMU-format pronouncing dictionary to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        match DictionaryCounter::from_file(&self.dictionary) {
            Ok(dictionary) => {
                println!("✓ Dictionary is valid!");
                println!("  Words: {}", dictionary.len());
                if dictionary.allows_silent_words() {
                    println!("  Contains zero-syllable entries");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            dictionary: PathBuf::from("cmudict.dict"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("cmudict.dict"));
    }

    #[test]
    fn test_validate_valid_dictionary() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, ";;; sample\nold OW1 L D\npond P AA1 N D\n").unwrap();

        let args = ValidateArgs {
            dictionary: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_dictionary() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "old OW1 L D\npond\n").unwrap();

        let args = ValidateArgs {
            dictionary: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
